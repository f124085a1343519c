//! Simulation core for TurbSim
//!
//! Generates synthetic gas-turbine sensor telemetry for a dashboard:
//! five channel waveforms (acceleration, strain, microphone, temperature,
//! tachometer), cosmetic spectral snapshots, and an s-/z-plane pole map
//! driven by a damping heuristic. There is no acquisition hardware, no
//! real FFT, and no control-system analysis behind any of it - the core
//! is the data model a charting layer redraws once per tick.
//!
//! Key constraints:
//! - `no_std`-capable, no heap allocation on the tick path
//! - Deterministic: seeded noise sources, reproducible sessions
//! - Total tick loop: bad input skips a tick, never kills the loop
//!
//! ```
//! use turbsim_core::{ControlInputs, Simulation, Channel};
//!
//! let mut sim = Simulation::new(42);
//! let controls = ControlInputs::fault();
//!
//! // One 100 ms timer callback
//! let report = sim.tick(&controls).unwrap();
//! assert_eq!(report.samples_appended, 10);
//!
//! // Renderer reads the streams afterwards
//! let window = sim.streams().get(Channel::Acceleration);
//! assert_eq!(window.len(), 10);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod channel;
pub mod clock;
pub mod constants;
pub mod controls;
pub mod errors;
pub mod generator;
pub mod poles;
pub mod rng;
pub mod sim;
pub mod spectrum;

// Public API
pub use buffer::{ChannelStreams, SampleBuffer};
pub use channel::{Channel, CHANNEL_COUNT};
pub use controls::ControlInputs;
pub use errors::{TickError, TickResult};
pub use generator::{SampleChunk, SignalGenerator};
pub use poles::{Pole, PoleMap, Stability};
pub use rng::SimRng;
pub use sim::{Simulation, TickDriver, TickReport};
pub use spectrum::SpectrumSlots;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
