//! Constants for the TurbSim Core
//!
//! Centralized, documented constants used throughout the simulation. All
//! numeric values the simulator depends on are defined here with their
//! purpose and origin (sensor datasheet, dashboard layout, or heuristic).
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Sensors**: sensor curve coefficients and per-channel scale factors
//! - **Simulation**: buffer sizes, chunk sizes, and timing
//! - **Control**: slider ranges and the pole-map heuristic
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose and source
//! 3. Use descriptive names that include units

/// Sensor curve coefficients and channel scale factors.
pub mod sensors;

/// Buffer sizes, chunk sizes, and tick timing.
pub mod simulation;

/// Control setpoint ranges and pole-map heuristic parameters.
pub mod control;

// Re-export commonly used constants for convenience
pub use sensors::{
    ACCEL_BASELINE_MV, PT1000_ALPHA_PER_C, PT1000_BASE_OHMS,
    TACHO_HIGH_V, TACHO_LOW_V, TACHO_TRIGGER_LEVEL,
};

pub use simulation::{
    CHUNK_LEN, HISTORY_LEN, NOISE_AMPLITUDE, SAMPLE_STEP_S,
    SPECTRUM_LEN, TICK_INTERVAL_MS,
};

pub use control::{
    DAMPING_BASE, DAMPING_SLOPE_PER_G, INSTABILITY_THRESHOLD,
    RPM_MIN, RPM_MAX, Z_SAMPLE_PERIOD_S,
};
