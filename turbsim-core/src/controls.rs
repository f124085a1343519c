//! Control State: the Five Dashboard Setpoints
//!
//! `ControlInputs` carries the five slider values the UI exposes. The core
//! reads them once per tick and never mutates them; the UI owns the
//! sliders. Values are clamped to the slider ranges on construction, which
//! is what keeps the rest of the core free of range checks.
//!
//! The two scenario presets mirror the dashboard's "TRIGGER FAULT" and
//! "RESET NORMAL" buttons.

use crate::constants::control::{
    NOISE_MAX, NOISE_MIN, RPM_MAX, RPM_MIN, STRAIN_MAX, STRAIN_MIN,
    TEMP_MAX, TEMP_MIN, VIBRATION_MAX, VIBRATION_MIN, VIBRATION_UNITS_PER_G,
};
use crate::errors::{TickError, TickResult};

/// Five scalar setpoints read once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlInputs {
    /// Shaft speed setpoint (RPM, 1000-20000).
    pub rpm: f32,
    /// Vibration setpoint (tenths of g, 0-50).
    pub vibration: f32,
    /// Strain setpoint (µε, 0-500).
    pub strain: f32,
    /// Noise-level setpoint (dB, 0-100).
    pub noise_db: f32,
    /// Temperature setpoint (°C, 0-1000).
    pub temp_c: f32,
}

impl ControlInputs {
    /// Build a control state, clamping each setpoint to its slider range.
    ///
    /// Non-finite values are not clamped here; they are rejected at the
    /// tick boundary by [`check_finite`](Self::check_finite) so a single
    /// bad tick is skipped instead of poisoning the streams.
    pub fn new(rpm: f32, vibration: f32, strain: f32, noise_db: f32, temp_c: f32) -> Self {
        Self {
            rpm: rpm.clamp(RPM_MIN, RPM_MAX),
            vibration: vibration.clamp(VIBRATION_MIN, VIBRATION_MAX),
            strain: strain.clamp(STRAIN_MIN, STRAIN_MAX),
            noise_db: noise_db.clamp(NOISE_MIN, NOISE_MAX),
            temp_c: temp_c.clamp(TEMP_MIN, TEMP_MAX),
        }
    }

    /// Fault scenario preset: high vibration, strain, noise, and heat at
    /// reduced shaft speed.
    pub fn fault() -> Self {
        Self::new(13500.0, 45.0, 450.0, 95.0, 850.0)
    }

    /// Normal operating preset: optimal shaft speed, low everything else.
    pub fn normal() -> Self {
        Self::new(15000.0, 5.0, 100.0, 50.0, 650.0)
    }

    /// Vibration setpoint converted from slider units to g.
    pub fn vibration_g(&self) -> f32 {
        self.vibration / VIBRATION_UNITS_PER_G
    }

    /// Reject non-finite setpoints at the tick boundary.
    pub fn check_finite(&self) -> TickResult<()> {
        let fields = [
            ("rpm", self.rpm),
            ("vibration", self.vibration),
            ("strain", self.strain),
            ("noise_db", self.noise_db),
            ("temp_c", self.temp_c),
        ];
        for (input, value) in fields {
            if !value.is_finite() {
                return Err(TickError::NonFiniteInput { input, value });
            }
        }
        Ok(())
    }
}

impl Default for ControlInputs {
    /// Defaults to the normal operating preset.
    fn default() -> Self {
        Self::normal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_values_are_clamped() {
        let c = ControlInputs::new(500.0, 80.0, -3.0, 200.0, 1500.0);
        assert_eq!(c.rpm, 1000.0);
        assert_eq!(c.vibration, 50.0);
        assert_eq!(c.strain, 0.0);
        assert_eq!(c.noise_db, 100.0);
        assert_eq!(c.temp_c, 1000.0);
    }

    #[test]
    fn scenario_presets() {
        let fault = ControlInputs::fault();
        assert_eq!(fault.rpm, 13500.0);
        assert_eq!(fault.vibration_g(), 4.5);

        let normal = ControlInputs::normal();
        assert_eq!(normal.rpm, 15000.0);
        assert_eq!(normal.vibration_g(), 0.5);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let mut c = ControlInputs::normal();
        assert!(c.check_finite().is_ok());

        c.strain = f32::NAN;
        let err = c.check_finite().unwrap_err();
        assert!(matches!(err, TickError::NonFiniteInput { input: "strain", .. }));
    }
}
