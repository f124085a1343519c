//! Simulated Elapsed-Time Accumulator
//!
//! The generator's notion of time: a monotonically non-decreasing seconds
//! counter advanced by a fixed step per generated sample. It is never
//! reset during a session, so the waveform phase is continuous across
//! ticks even when setpoints jump.
//!
//! `f64` is used for the accumulator because the phase argument
//! `omega * t` grows without bound over a long session; accumulating in
//! `f32` would visibly degrade the sinusoids after a few minutes.

use crate::constants::simulation::SAMPLE_STEP_S;

/// Monotonic simulated clock advanced once per generated sample.
#[derive(Debug, Clone)]
pub struct SimClock {
    elapsed_s: f64,
}

impl SimClock {
    /// Clock starting at t = 0.
    pub const fn new() -> Self {
        Self { elapsed_s: 0.0 }
    }

    /// Advance by one sample step and return the new elapsed time.
    pub fn advance(&mut self) -> f64 {
        self.elapsed_s += SAMPLE_STEP_S;
        self.elapsed_s
    }

    /// Total simulated seconds since startup.
    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
