//! Cosmetic Pole-Map Estimation
//!
//! ## Overview
//!
//! The dashboard overlays a conjugate pole pair on an s-plane plot and its
//! discrete-time image on a z-plane plot. The poles are not fitted from
//! any transfer function - they are a display heuristic driven by two
//! setpoints:
//!
//! ```text
//! damping = 0.5 - 0.08 · vib_g
//! freq    = (rpm / 60) / 20
//! s       = -damping ± j·freq
//! z       = exp(s · T),  T = 0.1 s
//! ```
//!
//! The exponential mapping gives `|z| = exp(-damping · T)`: positive
//! damping lands inside the unit circle, negative damping outside. The
//! "unstable" flag fires when damping drops below 0.1 and is a color hint
//! for the markers, not a control decision.
//!
//! Note: the fault scenario preset (vibration 4.5 g) yields damping 0.14,
//! which sits above the 0.1 threshold - the dashboard's fault button does
//! not actually flip the stability flag. Both constants are kept as-is.

use crate::constants::control::{
    DAMPING_BASE, DAMPING_SLOPE_PER_G, INSTABILITY_THRESHOLD,
    POLE_FREQ_DIVISOR, Z_SAMPLE_PERIOD_S,
};

/// One complex-plane point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pole {
    /// Real part.
    pub re: f32,
    /// Imaginary part.
    pub im: f32,
}

impl Pole {
    /// The complex conjugate (lower half-plane twin).
    pub const fn conjugate(&self) -> Pole {
        Pole {
            re: self.re,
            im: -self.im,
        }
    }

    /// Distance from the origin.
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.re * self.re + self.im * self.im)
    }
}

/// Display hint derived from the damping heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stability {
    /// Damping at or above the instability threshold.
    Stable,
    /// Damping below the instability threshold.
    Unstable,
}

impl Stability {
    /// Convenience predicate for status displays.
    pub const fn is_stable(&self) -> bool {
        matches!(self, Stability::Stable)
    }
}

/// Latest pole estimate for both domains.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoleMap {
    /// Upper-half-plane continuous-time pole.
    pub s: Pole,
    /// Upper-half-plane discrete-time pole.
    pub z: Pole,
    /// Damping value the estimate was derived from.
    pub damping: f32,
    /// Stability hint for marker coloring.
    pub stability: Stability,
}

impl PoleMap {
    /// Recompute the pole pair from the current setpoints.
    ///
    /// Pure function of its inputs; called once per tick.
    pub fn estimate(vib_g: f32, rpm: f32) -> Self {
        let damping = DAMPING_BASE - vib_g * DAMPING_SLOPE_PER_G;
        let freq = rpm / 60.0 / POLE_FREQ_DIVISOR;

        let s = Pole {
            re: -damping,
            im: freq,
        };

        // z = exp((-damping + j·freq) · T)
        //   = exp(-damping·T) · (cos(freq·T) + j·sin(freq·T))
        let radius = libm::expf(-damping * Z_SAMPLE_PERIOD_S);
        let angle = freq * Z_SAMPLE_PERIOD_S;
        let z = Pole {
            re: radius * libm::cosf(angle),
            im: radius * libm::sinf(angle),
        };

        let stability = if damping < INSTABILITY_THRESHOLD {
            Stability::Unstable
        } else {
            Stability::Stable
        };

        Self {
            s,
            z,
            damping,
            stability,
        }
    }

    /// Continuous-time conjugate pair, upper pole first.
    pub const fn s_pair(&self) -> [Pole; 2] {
        [self.s, self.s.conjugate()]
    }

    /// Discrete-time conjugate pair, upper pole first.
    pub const fn z_pair(&self) -> [Pole; 2] {
        [self.z, self.z.conjugate()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_scenario_is_strictly_stable() {
        // vib_g = 0.5 -> damping = 0.5 - 0.08 · 0.5 = 0.46
        let map = PoleMap::estimate(0.5, 15000.0);
        assert!((map.damping - 0.46).abs() < 1e-6);
        assert_eq!(map.stability, Stability::Stable);
    }

    #[test]
    fn fault_scenario_stays_above_threshold() {
        // vib_g = 4.5 -> damping = 0.14, which does NOT cross the 0.1
        // threshold: the fault preset never flips the flag.
        let map = PoleMap::estimate(4.5, 13500.0);
        assert!((map.damping - 0.14).abs() < 1e-6);
        assert_eq!(map.stability, Stability::Stable);
    }

    #[test]
    fn threshold_is_strict() {
        // damping exactly 0.1 (vib_g = 5.0) is still stable
        let at = PoleMap::estimate(5.0, 15000.0);
        assert!((at.damping - 0.1).abs() < 1e-6);
        assert_eq!(at.stability, Stability::Stable);

        let below = PoleMap::estimate(5.01, 15000.0);
        assert_eq!(below.stability, Stability::Unstable);
    }

    #[test]
    fn z_magnitude_matches_exponential_mapping() {
        let map = PoleMap::estimate(0.5, 15000.0);
        let expected = libm::expf(-map.damping * Z_SAMPLE_PERIOD_S);
        assert!((map.z.magnitude() - expected).abs() < 1e-5);
    }

    #[test]
    fn positive_damping_maps_inside_unit_circle() {
        let map = PoleMap::estimate(0.0, 20000.0);
        assert!(map.z.magnitude() < 1.0);
    }

    #[test]
    fn negative_damping_maps_outside_unit_circle() {
        // vib_g beyond the slider range still computes; damping goes
        // negative at vib_g > 6.25
        let map = PoleMap::estimate(10.0, 20000.0);
        assert!(map.damping < 0.0);
        assert!(map.z.magnitude() > 1.0);
    }

    #[test]
    fn pairs_are_conjugates() {
        let map = PoleMap::estimate(1.0, 12000.0);

        let [s_up, s_dn] = map.s_pair();
        assert_eq!(s_up.re, s_dn.re);
        assert_eq!(s_up.im, -s_dn.im);

        let [z_up, z_dn] = map.z_pair();
        assert_eq!(z_up.re, z_dn.re);
        assert_eq!(z_up.im, -z_dn.im);
    }

    #[test]
    fn s_pole_tracks_inputs() {
        let map = PoleMap::estimate(2.0, 12000.0);
        // damping = 0.5 - 0.16 = 0.34; freq = 200 / 20 = 10
        assert!((map.s.re + 0.34).abs() < 1e-6);
        assert!((map.s.im - 10.0).abs() < 1e-6);
    }
}
