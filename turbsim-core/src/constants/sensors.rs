//! Sensor Curve Coefficients and Channel Scale Factors
//!
//! Per-channel constants for the synthetic waveform mappings. The channels
//! imitate a concrete hardware set (AC192 accelerometer, foil strain gauge,
//! INMP441 microphone, RTD PT1000, optical tachometer) but the mappings are
//! illustrative, not physically modeled.

// ===== ACCELEROMETER (AC192) =====

/// Baseline accelerometer output at rest (mV).
///
/// IEPE-style accelerometers idle around a mid-rail bias voltage; the
/// waveform oscillates around this offset.
pub const ACCEL_BASELINE_MV: f32 = 1500.0;

/// Accelerometer sensitivity (mV per g of vibration).
pub const ACCEL_SCALE_MV_PER_G: f32 = 100.0;

// ===== STRAIN GAUGE =====

/// Noise gain applied to the strain channel (µε per unit noise).
///
/// Strain bridges are noisier than the raw noise term; the shared noise
/// sample is scaled up before being added.
pub const STRAIN_NOISE_SCALE: f32 = 10.0;

// ===== MICROPHONE (INMP441) =====

/// Microphone output gain (dBFS counts per dB of noise setpoint).
pub const MIC_SCALE: f32 = 100.0;

/// Noise gain applied to the microphone channel.
pub const MIC_NOISE_SCALE: f32 = 500.0;

/// Harmonic multiple of the shaft frequency radiated acoustically.
///
/// Blade-pass noise shows up at a low-integer multiple of shaft speed;
/// the simulator uses the third harmonic.
pub const MIC_HARMONIC: f32 = 3.0;

// ===== RTD PT1000 =====

/// PT1000 resistance at 0 °C (Ω).
///
/// Source: IEC 60751 (Pt1000 class RTD).
pub const PT1000_BASE_OHMS: f32 = 1000.0;

/// PT1000 temperature coefficient (1/°C).
///
/// Standard alpha for platinum RTDs: R(T) = R0 · (1 + α·T), linear
/// approximation of the Callendar-Van Dusen curve.
///
/// Source: IEC 60751 (α = 0.00385)
pub const PT1000_ALPHA_PER_C: f32 = 0.00385;

/// Noise gain applied to the temperature channel (Ω per unit noise).
pub const TEMP_NOISE_SCALE_OHMS: f32 = 5.0;

// ===== OPTICAL TACHOMETER =====

/// Tachometer pulse high level (V).
///
/// TTL-style once-per-revolution trigger output.
pub const TACHO_HIGH_V: f32 = 5.0;

/// Tachometer pulse low level (V).
pub const TACHO_LOW_V: f32 = 0.0;

/// Normalized waveform level above which the tacho pulse fires.
///
/// The pulse is a square-wave proxy for a shaft-revolution trigger: high
/// only near the sinusoid's crest.
pub const TACHO_TRIGGER_LEVEL: f32 = 0.9;
