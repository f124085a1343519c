//! Simulation Tick Loop
//!
//! ## Overview
//!
//! Ties the pieces together: one `tick` reads the control state, generates
//! a sample chunk, feeds the five channel streams, rebuilds the five
//! spectral snapshots, and re-estimates the pole map. The embedding UI
//! owns the 100 ms timer and the renderer; the core only exposes the data
//! model the renderer reads after each tick.
//!
//! ```text
//! timer ─▶ tick ─▶ generator ─▶ channel streams (×5)
//!                     │
//!                     ├──▶ spectral snapshots (×5)
//!                     └──▶ pole map
//! ```
//!
//! ## Re-entrancy
//!
//! `Simulation::tick` takes `&mut self`, so overlapping invocation is
//! impossible by construction on the single-threaded loop. For callers
//! wired to an external timer callback, [`TickDriver`] models the original
//! skip-don't-queue behavior explicitly: a tick arriving while one is in
//! flight gets `nb::Error::WouldBlock` and is dropped - no backlog, no
//! backpressure.
//!
//! ## Totality
//!
//! A tick can only fail on non-finite control input from an untrusted
//! boundary. The failure is caught here at the tick boundary, the tick is
//! skipped, and the streams keep their previous contents; the loop never
//! dies mid-session.

use crate::buffer::ChannelStreams;
use crate::channel::{Channel, CHANNEL_COUNT};
use crate::constants::simulation::{
    CHUNK_LEN, SPECTRUM_PEAK_ACCEL, SPECTRUM_PEAK_MIC, SPECTRUM_PEAK_STRAIN,
    SPECTRUM_PEAK_TACHO, SPECTRUM_PEAK_TEMP,
};
use crate::controls::ControlInputs;
use crate::errors::{TickError, TickResult};
use crate::generator::SignalGenerator;
use crate::poles::{PoleMap, Stability};
use crate::rng::SimRng;
use crate::spectrum::SpectrumSlots;

/// Nominal spectral target for one channel: (target RPM, peak height).
///
/// The microphone peak tracks the third harmonic; temperature has no
/// rotational line, so its target frequency is zero and only texture
/// noise appears.
fn spectral_target(channel: Channel, rpm: f32) -> (f32, f32) {
    match channel {
        Channel::Acceleration => (rpm, SPECTRUM_PEAK_ACCEL),
        Channel::Strain => (rpm, SPECTRUM_PEAK_STRAIN),
        Channel::Microphone => (rpm * 3.0, SPECTRUM_PEAK_MIC),
        Channel::Temperature => (0.0, SPECTRUM_PEAK_TEMP),
        Channel::Tachometer => (rpm, SPECTRUM_PEAK_TACHO),
    }
}

/// Summary of one completed tick, for status displays.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Index of the completed tick (0-based).
    pub tick: u64,
    /// Samples appended to each channel stream this tick.
    pub samples_appended: usize,
    /// Simulated seconds elapsed since startup.
    pub elapsed_s: f64,
    /// Stability hint from the latest pole estimate.
    pub stability: Stability,
}

/// The simulation core: generator, streams, spectra, and pole map.
#[derive(Debug, Clone)]
pub struct Simulation {
    generator: SignalGenerator,
    spectrum_rng: SimRng,
    streams: ChannelStreams,
    spectra: [SpectrumSlots; CHANNEL_COUNT],
    poles: PoleMap,
    ticks: u64,
}

impl Simulation {
    /// Simulation with seeded noise sources and empty streams.
    ///
    /// The waveform and spectral noise sources are derived from the same
    /// seed but decoupled, so adding spectrum draws never shifts the
    /// waveform sequence.
    pub fn new(seed: u32) -> Self {
        Self {
            generator: SignalGenerator::new(seed),
            spectrum_rng: SimRng::new(seed.wrapping_add(1)),
            streams: ChannelStreams::new(),
            spectra: [
                SpectrumSlots::new(),
                SpectrumSlots::new(),
                SpectrumSlots::new(),
                SpectrumSlots::new(),
                SpectrumSlots::new(),
            ],
            // Poles start at the default control state
            poles: PoleMap::estimate(
                ControlInputs::default().vibration_g(),
                ControlInputs::default().rpm,
            ),
            ticks: 0,
        }
    }

    /// Run one full generation/update pass.
    ///
    /// Reads the control state once, then: generate chunk, append to all
    /// five streams, rebuild all five spectra, re-estimate the poles.
    pub fn tick(&mut self, controls: &ControlInputs) -> TickResult<TickReport> {
        controls.check_finite()?;

        let chunk = self.generator.generate(controls);
        for channel in Channel::ALL {
            self.streams.extend(channel, chunk.channel(channel));
        }

        for channel in Channel::ALL {
            let (target_rpm, peak) = spectral_target(channel, controls.rpm);
            self.spectra[channel.index()].fill(target_rpm, peak, &mut self.spectrum_rng);
        }

        self.poles = PoleMap::estimate(controls.vibration_g(), controls.rpm);

        let report = TickReport {
            tick: self.ticks,
            samples_appended: CHUNK_LEN,
            elapsed_s: self.generator.elapsed_s(),
            stability: self.poles.stability,
        };
        self.ticks += 1;
        Ok(report)
    }

    /// Channel stream windows for the renderer.
    pub fn streams(&self) -> &ChannelStreams {
        &self.streams
    }

    /// Latest spectral snapshot for one channel.
    pub fn spectrum(&self, channel: Channel) -> &SpectrumSlots {
        &self.spectra[channel.index()]
    }

    /// Latest pole estimate.
    pub fn poles(&self) -> &PoleMap {
        &self.poles
    }

    /// Completed tick count.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total simulated seconds since startup.
    pub fn elapsed_s(&self) -> f64 {
        self.generator.elapsed_s()
    }
}

/// Timer-callback adapter with an explicit in-flight token.
///
/// The original dashboard guarded its timer callback with a boolean and
/// silently dropped ticks that fired mid-update. `TickDriver` keeps that
/// contract but makes the guard a non-blocking try-acquire: `try_tick`
/// returns `nb::Error::WouldBlock` instead of overlapping, and the caller
/// skips the tick. Failed ticks release the token, so one bad input never
/// wedges the loop.
#[derive(Debug)]
pub struct TickDriver {
    sim: Simulation,
    in_flight: bool,
}

impl TickDriver {
    /// Wrap a simulation for timer-callback use.
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            in_flight: false,
        }
    }

    /// Attempt one tick; skip without queuing when one is in flight.
    pub fn try_tick(&mut self, controls: &ControlInputs) -> nb::Result<TickReport, TickError> {
        if self.in_flight {
            return Err(nb::Error::WouldBlock);
        }
        self.in_flight = true;

        let result = self.sim.tick(controls);
        self.in_flight = false;

        match result {
            Ok(report) => Ok(report),
            Err(err) => {
                #[cfg(feature = "log")]
                log::warn!("tick {} skipped: {}", self.sim.ticks(), err);
                Err(nb::Error::Other(err))
            }
        }
    }

    /// Read access to the wrapped simulation.
    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Unwrap the simulation.
    pub fn into_inner(self) -> Simulation {
        self.sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::simulation::{HISTORY_LEN, SAMPLE_STEP_S, SPECTRUM_LEN};

    #[test]
    fn streams_grow_by_chunk_until_capacity() {
        let mut sim = Simulation::new(1);
        let controls = ControlInputs::normal();

        for n in 1..=(HISTORY_LEN / CHUNK_LEN) {
            sim.tick(&controls).unwrap();
            for channel in Channel::ALL {
                assert_eq!(sim.streams().get(channel).len(), n * CHUNK_LEN);
            }
        }

        // Past capacity the window stays fixed
        sim.tick(&controls).unwrap();
        for channel in Channel::ALL {
            assert_eq!(sim.streams().get(channel).len(), HISTORY_LEN);
        }
    }

    #[test]
    fn elapsed_time_is_monotonic_and_exact() {
        let mut sim = Simulation::new(2);
        let controls = ControlInputs::normal();
        let per_tick = CHUNK_LEN as f64 * SAMPLE_STEP_S;

        let mut previous = 0.0;
        for n in 1..=50 {
            let report = sim.tick(&controls).unwrap();
            assert!(report.elapsed_s > previous);
            assert!((report.elapsed_s - n as f64 * per_tick).abs() < 1e-9);
            previous = report.elapsed_s;
        }
    }

    #[test]
    fn spectra_refresh_each_tick() {
        let mut sim = Simulation::new(3);
        sim.tick(&ControlInputs::normal()).unwrap();

        for channel in Channel::ALL {
            let spectrum = sim.spectrum(channel);
            assert_eq!(spectrum.len(), SPECTRUM_LEN);
            assert!(spectrum.as_slice().iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn invalid_input_skips_tick_but_keeps_state() {
        let mut sim = Simulation::new(4);
        let good = ControlInputs::normal();
        sim.tick(&good).unwrap();

        let len_before = sim.streams().get(Channel::Strain).len();
        let elapsed_before = sim.elapsed_s();

        let mut bad = good;
        bad.rpm = f32::INFINITY;
        assert!(sim.tick(&bad).is_err());

        // Skipped tick leaves streams and clock untouched
        assert_eq!(sim.streams().get(Channel::Strain).len(), len_before);
        assert_eq!(sim.elapsed_s(), elapsed_before);

        // And the loop keeps running afterwards
        sim.tick(&good).unwrap();
    }

    #[test]
    fn tick_reports_count_up() {
        let mut sim = Simulation::new(5);
        let controls = ControlInputs::fault();

        for expected in 0..5 {
            let report = sim.tick(&controls).unwrap();
            assert_eq!(report.tick, expected);
            assert_eq!(report.samples_appended, CHUNK_LEN);
        }
        assert_eq!(sim.ticks(), 5);
    }

    #[test]
    fn fault_preset_reports_stable() {
        // Preserved discrepancy: damping 0.14 stays above the 0.1
        // threshold, so even the fault preset reports Stable.
        let mut sim = Simulation::new(6);
        let report = sim.tick(&ControlInputs::fault()).unwrap();
        assert_eq!(report.stability, Stability::Stable);
        assert!((sim.poles().damping - 0.14).abs() < 1e-6);
    }

    #[test]
    fn driver_recovers_after_failed_tick() {
        let mut driver = TickDriver::new(Simulation::new(7));

        let mut bad = ControlInputs::normal();
        bad.temp_c = f32::NAN;
        assert!(matches!(
            driver.try_tick(&bad),
            Err(nb::Error::Other(TickError::NonFiniteInput { .. }))
        ));

        // Token was released; the next tick proceeds
        assert!(driver.try_tick(&ControlInputs::normal()).is_ok());
        assert_eq!(driver.sim().ticks(), 1);
    }

    #[test]
    fn same_seed_reproduces_whole_session() {
        let mut a = Simulation::new(42);
        let mut b = Simulation::new(42);
        let controls = ControlInputs::fault();

        for _ in 0..40 {
            a.tick(&controls).unwrap();
            b.tick(&controls).unwrap();
        }

        for channel in Channel::ALL {
            let sa = a.streams().get(channel).snapshot();
            let sb = b.streams().get(channel).snapshot();
            assert_eq!(sa.as_slice(), sb.as_slice());
            assert_eq!(
                a.spectrum(channel).as_slice(),
                b.spectrum(channel).as_slice()
            );
        }
    }
}
