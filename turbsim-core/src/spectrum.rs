//! Synthetic Spectral Snapshots
//!
//! The dashboard's "FFT" panels are cosmetic: a fixed 256-slot array that
//! is fully overwritten each tick with one elevated peak at the slot
//! derived from the target frequency, plus low random texture on every
//! fifth slot. No transform is performed and no round-trip property holds;
//! the only guarantees are that the array length never changes and that
//! all values are non-negative for non-negative peak parameters.
//!
//! The peak index is `floor((target_rpm / 60) / 2)` and is written only
//! when it falls strictly inside the array (index 0 excluded). Targets
//! that map outside - the microphone's tripled RPM at high shaft speed,
//! or temperature's zero target - simply produce a texture-only snapshot.

use crate::constants::simulation::{
    SPECTRUM_LEN, SPECTRUM_PEAK_JITTER, SPECTRUM_TEXTURE_MAX,
    SPECTRUM_TEXTURE_STRIDE,
};
use crate::rng::SimRng;

/// Fixed-length synthetic frequency-domain snapshot.
#[derive(Debug, Clone)]
pub struct SpectrumSlots {
    slots: [f32; SPECTRUM_LEN],
}

impl SpectrumSlots {
    /// All-zero snapshot.
    pub const fn new() -> Self {
        Self {
            slots: [0.0; SPECTRUM_LEN],
        }
    }

    /// Overwrite the snapshot for a new tick.
    ///
    /// Clears every slot, places `peak_height` plus integer jitter at the
    /// index derived from `target_rpm` (bounds-checked, index 0 excluded),
    /// then lays texture noise on every fifth slot. The texture pass runs
    /// last, so a peak landing on a texture slot is overwritten - matching
    /// the dashboard's original draw order.
    pub fn fill(&mut self, target_rpm: f32, peak_height: f32, rng: &mut SimRng) {
        self.slots = [0.0; SPECTRUM_LEN];

        let freq_index = (target_rpm / 60.0) / 2.0;
        let idx = freq_index as usize;

        if idx > 0 && idx < SPECTRUM_LEN {
            self.slots[idx] = peak_height + rng.next_below(SPECTRUM_PEAK_JITTER) as f32;
        }

        let mut k = 0;
        while k < SPECTRUM_LEN {
            self.slots[k] = rng.next_f32() * SPECTRUM_TEXTURE_MAX;
            k += SPECTRUM_TEXTURE_STRIDE;
        }
    }

    /// Slot values for rendering.
    pub fn as_slice(&self) -> &[f32] {
        &self.slots
    }

    /// Number of slots (always `SPECTRUM_LEN`).
    pub const fn len(&self) -> usize {
        SPECTRUM_LEN
    }

    /// A snapshot always has slots.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for SpectrumSlots {
    fn default() -> Self {
        Self::new()
    }
}
