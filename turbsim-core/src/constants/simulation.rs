//! Buffer Sizes, Chunk Sizes, and Tick Timing
//!
//! Timing and capacity constants for the simulation loop. These match the
//! dashboard's display geometry: the time plots scroll a 300-sample window
//! and the spectral plots show 256 slots.

/// Samples retained per channel stream.
///
/// The renderer scrolls a fixed window; older samples are evicted FIFO.
pub const HISTORY_LEN: usize = 300;

/// Slots in a synthetic spectral snapshot.
///
/// Sized like a 256-point FFT output, but the contents are synthetic
/// texture, not a transform.
pub const SPECTRUM_LEN: usize = 256;

/// Samples generated per channel per tick.
pub const CHUNK_LEN: usize = 10;

/// Simulated time advanced per generated sample (seconds).
///
/// 10 samples per 100 ms tick at 0.002 s/sample: the simulated clock runs
/// at one fifth of wall time, which keeps the scrolling waveforms readable.
pub const SAMPLE_STEP_S: f64 = 0.002;

/// Peak amplitude of the uniform noise term shared by all channels.
///
/// Each sample draws one noise value in [-0.1, +0.1) which the channel
/// mappings scale individually.
pub const NOISE_AMPLITUDE: f64 = 0.2;

/// Nominal interval between simulation ticks (ms).
///
/// Owned by the embedding UI's timer; the core only documents it.
pub const TICK_INTERVAL_MS: u32 = 100;

// ===== SPECTRAL TEXTURE =====

/// Stride at which spectral slots receive random texture noise.
pub const SPECTRUM_TEXTURE_STRIDE: usize = 5;

/// Upper bound of the spectral texture noise.
pub const SPECTRUM_TEXTURE_MAX: f32 = 5.0;

/// Upper bound of the integer jitter added to a spectral peak.
pub const SPECTRUM_PEAK_JITTER: u32 = 10;

// ===== PER-CHANNEL SPECTRAL PEAKS =====
//
// Nominal peak heights chosen to sit inside each plot's fixed Y range.

/// Vibration spectrum peak height.
pub const SPECTRUM_PEAK_ACCEL: f32 = 200.0;

/// Strain spectrum peak height.
pub const SPECTRUM_PEAK_STRAIN: f32 = 150.0;

/// Audio spectrum peak height.
pub const SPECTRUM_PEAK_MIC: f32 = 200.0;

/// Temperature-noise spectrum peak height.
///
/// Temperature has no rotational line; its target frequency is zero, so
/// only the texture noise survives (the peak index is out of bounds).
pub const SPECTRUM_PEAK_TEMP: f32 = 10.0;

/// RPM spectrum peak height.
pub const SPECTRUM_PEAK_TACHO: f32 = 100.0;
