//! Control Setpoint Ranges and Pole-Map Heuristic Parameters
//!
//! The setpoint ranges mirror the dashboard sliders; inputs are clamped to
//! these on construction, so downstream math never divides by zero
//! (`RPM_MIN` keeps every derived frequency positive).

// ===== SETPOINT RANGES =====

/// Minimum shaft speed (RPM). Floor keeps rpm/60 strictly positive.
pub const RPM_MIN: f32 = 1000.0;

/// Maximum shaft speed (RPM).
pub const RPM_MAX: f32 = 20000.0;

/// Vibration slider range (tenths of g).
pub const VIBRATION_MIN: f32 = 0.0;
/// Upper vibration slider bound (tenths of g, i.e. 5.0 g).
pub const VIBRATION_MAX: f32 = 50.0;

/// Strain slider range (µε).
pub const STRAIN_MIN: f32 = 0.0;
/// Upper strain slider bound (µε).
pub const STRAIN_MAX: f32 = 500.0;

/// Noise-level slider range (dB).
pub const NOISE_MIN: f32 = 0.0;
/// Upper noise-level slider bound (dB).
pub const NOISE_MAX: f32 = 100.0;

/// Temperature slider range (°C).
pub const TEMP_MIN: f32 = 0.0;
/// Upper temperature slider bound (°C).
pub const TEMP_MAX: f32 = 1000.0;

/// Vibration slider units per g.
pub const VIBRATION_UNITS_PER_G: f32 = 10.0;

// ===== POLE-MAP HEURISTIC =====

/// Damping at zero vibration.
pub const DAMPING_BASE: f32 = 0.5;

/// Damping lost per g of vibration.
pub const DAMPING_SLOPE_PER_G: f32 = 0.08;

/// Damping below which the pole markers flag "unstable".
///
/// Display hint only, not a control decision. Note: the fault scenario
/// preset lands at damping 0.14, which does not cross this threshold.
pub const INSTABILITY_THRESHOLD: f32 = 0.1;

/// Divisor mapping shaft frequency (Hz) to the pole's imaginary part.
///
/// Keeps the pole inside the fixed s-plane plot limits across the full
/// RPM range.
pub const POLE_FREQ_DIVISOR: f32 = 20.0;

/// Sample period used for the s-to-z exponential mapping (seconds).
pub const Z_SAMPLE_PERIOD_S: f32 = 0.1;
