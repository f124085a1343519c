//! Error Types for the Tick Boundary
//!
//! The simulation core is total by design: control inputs are clamped to
//! the slider ranges, spectral indices are bounds-checked before writing,
//! and the RPM floor keeps derived frequencies positive. The one failure
//! that can cross into the core is a non-finite setpoint arriving from an
//! untrusted boundary. That is caught at the tick boundary and the tick is
//! skipped; the loop itself never fails.
//!
//! Errors are kept small and `Copy` (inline `&'static str`, no heap) so
//! they can be returned from the hot path and logged without allocation.

use thiserror_no_std::Error;

/// Result type for tick operations
pub type TickResult<T> = Result<T, TickError>;

/// Errors surfaced at the tick boundary - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TickError {
    /// A control setpoint was NaN or infinite
    #[error("Control input '{input}' is not finite: {value}")]
    NonFiniteInput {
        /// Name of the offending setpoint
        input: &'static str,
        /// The raw value that failed the check
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NonFiniteInput { input, value } =>
                defmt::write!(fmt, "Control input '{}' not finite: {}", input, value),
        }
    }
}
