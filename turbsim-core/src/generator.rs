//! Synthetic Waveform Generator for the Five Dashboard Channels
//!
//! ## Overview
//!
//! Once per tick the generator turns the current control setpoints into a
//! short chunk of samples for every channel. The shaft speed sets a base
//! sinusoid; each channel applies its own illustrative mapping on top
//! (bias, gain, harmonic, sensor curve, or pulse shaping). None of this is
//! a physical model - it only has to look right on a scrolling plot.
//!
//! ## Per-sample recipe
//!
//! ```text
//! freq  = rpm / 60                     shaft frequency (Hz)
//! omega = 2π · freq                    angular frequency
//! t     = clock.advance()              fixed 0.002 s step
//! noise = (uniform[0,1) - 0.5) · 0.2   shared noise term
//! wave  = sin(omega · t)               base sinusoid
//! ```
//!
//! The clock and noise source are owned by the generator and advance as a
//! side effect of `generate`; everything else is pure. Two generators
//! built from the same seed produce identical chunks.
//!
//! Phase math runs in `f64` (the accumulator grows for the whole session);
//! emitted samples are `f32` like the rest of the pipeline.

use crate::channel::Channel;
use crate::clock::SimClock;
use crate::constants::sensors::{
    ACCEL_BASELINE_MV, ACCEL_SCALE_MV_PER_G, MIC_HARMONIC, MIC_NOISE_SCALE,
    MIC_SCALE, PT1000_ALPHA_PER_C, PT1000_BASE_OHMS, STRAIN_NOISE_SCALE,
    TACHO_HIGH_V, TACHO_LOW_V, TACHO_TRIGGER_LEVEL, TEMP_NOISE_SCALE_OHMS,
};
use crate::constants::simulation::{CHUNK_LEN, NOISE_AMPLITUDE};
use crate::controls::ControlInputs;
use crate::rng::SimRng;

/// One tick's worth of samples for every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleChunk {
    /// Accelerometer samples (mV).
    pub accel: [f32; CHUNK_LEN],
    /// Strain gauge samples (µε).
    pub strain: [f32; CHUNK_LEN],
    /// Microphone samples (dBFS counts).
    pub mic: [f32; CHUNK_LEN],
    /// PT1000 resistance samples (Ω).
    pub temp: [f32; CHUNK_LEN],
    /// Tachometer pulse samples (V).
    pub tacho: [f32; CHUNK_LEN],
}

impl SampleChunk {
    /// Samples for one channel.
    pub fn channel(&self, channel: Channel) -> &[f32; CHUNK_LEN] {
        match channel {
            Channel::Acceleration => &self.accel,
            Channel::Strain => &self.strain,
            Channel::Microphone => &self.mic,
            Channel::Temperature => &self.temp,
            Channel::Tachometer => &self.tacho,
        }
    }

    /// Samples per channel in this chunk.
    pub const fn len(&self) -> usize {
        CHUNK_LEN
    }

    /// A chunk is never empty.
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Produces one `SampleChunk` per tick from the current control state.
#[derive(Debug, Clone)]
pub struct SignalGenerator {
    clock: SimClock,
    rng: SimRng,
}

impl SignalGenerator {
    /// Generator with a fresh clock and a seeded noise source.
    pub const fn new(seed: u32) -> Self {
        Self {
            clock: SimClock::new(),
            rng: SimRng::new(seed),
        }
    }

    /// Generate the next chunk for all channels.
    ///
    /// Advances the simulated clock by one sample step per sample; this is
    /// the only state the call mutates besides the noise source.
    pub fn generate(&mut self, controls: &ControlInputs) -> SampleChunk {
        let freq = f64::from(controls.rpm) / 60.0;
        let omega = 2.0 * core::f64::consts::PI * freq;

        let vib_g = f64::from(controls.vibration_g());
        let strain = f64::from(controls.strain);
        let noise_db = f64::from(controls.noise_db);
        let temp_c = f64::from(controls.temp_c);

        let mut chunk = SampleChunk {
            accel: [0.0; CHUNK_LEN],
            strain: [0.0; CHUNK_LEN],
            mic: [0.0; CHUNK_LEN],
            temp: [0.0; CHUNK_LEN],
            tacho: [0.0; CHUNK_LEN],
        };

        for i in 0..CHUNK_LEN {
            let t = self.clock.advance();
            let noise = (f64::from(self.rng.next_f32()) - 0.5) * NOISE_AMPLITUDE;
            let wave = libm::sin(omega * t);

            chunk.accel[i] = (f64::from(ACCEL_BASELINE_MV)
                + f64::from(ACCEL_SCALE_MV_PER_G) * (vib_g * wave + noise))
                as f32;

            chunk.strain[i] =
                (strain * wave + noise * f64::from(STRAIN_NOISE_SCALE)) as f32;

            chunk.mic[i] = (noise_db
                * f64::from(MIC_SCALE)
                * libm::sin(f64::from(MIC_HARMONIC) * omega * t)
                + noise * f64::from(MIC_NOISE_SCALE)) as f32;

            chunk.temp[i] = (f64::from(PT1000_BASE_OHMS)
                * (1.0 + f64::from(PT1000_ALPHA_PER_C) * temp_c)
                + noise * f64::from(TEMP_NOISE_SCALE_OHMS))
                as f32;

            chunk.tacho[i] = if wave > f64::from(TACHO_TRIGGER_LEVEL) {
                TACHO_HIGH_V
            } else {
                TACHO_LOW_V
            };
        }

        chunk
    }

    /// Total simulated seconds since startup.
    pub fn elapsed_s(&self) -> f64 {
        self.clock.elapsed_s()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::simulation::SAMPLE_STEP_S;

    #[test]
    fn chunk_has_fixed_length() {
        let mut gen = SignalGenerator::new(1);
        let chunk = gen.generate(&ControlInputs::normal());
        for ch in Channel::ALL {
            assert_eq!(chunk.channel(ch).len(), CHUNK_LEN);
        }
    }

    #[test]
    fn clock_advances_one_tick_per_chunk() {
        let mut gen = SignalGenerator::new(1);
        let before = gen.elapsed_s();
        gen.generate(&ControlInputs::normal());
        let delta = gen.elapsed_s() - before;

        let expected = CHUNK_LEN as f64 * SAMPLE_STEP_S;
        assert!((delta - expected).abs() < 1e-12);
    }

    #[test]
    fn tacho_samples_are_binary() {
        let mut gen = SignalGenerator::new(3);
        for _ in 0..200 {
            let chunk = gen.generate(&ControlInputs::fault());
            for &v in &chunk.tacho {
                assert!(v == TACHO_HIGH_V || v == TACHO_LOW_V);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_chunks() {
        let mut a = SignalGenerator::new(42);
        let mut b = SignalGenerator::new(42);
        let controls = ControlInputs::fault();

        for _ in 0..10 {
            assert_eq!(a.generate(&controls), b.generate(&controls));
        }
    }

    #[test]
    fn temperature_follows_sensor_curve() {
        let mut gen = SignalGenerator::new(5);
        let controls = ControlInputs::new(15000.0, 0.0, 0.0, 0.0, 650.0);
        let chunk = gen.generate(&controls);

        // R(650 °C) = 1000 · (1 + 0.00385 · 650) = 3502.5 Ω, ± noise
        for &r in &chunk.temp {
            assert!((r - 3502.5).abs() < 1.0, "resistance {} off curve", r);
        }
    }

    #[test]
    fn accel_oscillates_around_baseline() {
        let mut gen = SignalGenerator::new(8);
        let controls = ControlInputs::normal();

        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for _ in 0..100 {
            let chunk = gen.generate(&controls);
            for &v in &chunk.accel {
                min = min.min(v);
                max = max.max(v);
            }
        }
        assert!(min < ACCEL_BASELINE_MV && ACCEL_BASELINE_MV < max);
        let (lo, hi) = Channel::Acceleration.display_range();
        assert!(min >= lo && max <= hi);
    }
}
