//! Channel Taxonomy for the Simulated Sensor Set
//!
//! One `Channel` per physical signal path on the dashboard. The enum maps
//! each channel to its display name, engineering unit, and the fixed
//! Y-range its time plot uses, so the renderer can iterate `Channel::ALL`
//! instead of hard-coding five panels.

/// One physical sensor signal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    /// AC192 accelerometer output (mV).
    Acceleration = 0,
    /// Foil strain gauge bridge output (µε).
    Strain = 1,
    /// INMP441 MEMS microphone output (dBFS counts).
    Microphone = 2,
    /// RTD PT1000 resistance (Ω).
    Temperature = 3,
    /// Optical tachometer pulse (V).
    Tachometer = 4,
}

/// Number of channels on the dashboard.
pub const CHANNEL_COUNT: usize = 5;

impl Channel {
    /// All channels in display order.
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Channel::Acceleration,
        Channel::Strain,
        Channel::Microphone,
        Channel::Temperature,
        Channel::Tachometer,
    ];

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Channel::Acceleration => "acceleration",
            Channel::Strain => "strain",
            Channel::Microphone => "microphone",
            Channel::Temperature => "temperature",
            Channel::Tachometer => "tachometer",
        }
    }

    /// Get unit of measurement for the time plot
    pub const fn unit(&self) -> &'static str {
        match self {
            Channel::Acceleration => "mV",
            Channel::Strain => "µε",
            Channel::Microphone => "dBFS",
            Channel::Temperature => "Ω",
            Channel::Tachometer => "V",
        }
    }

    /// Fixed Y-axis limits of the channel's scrolling time plot.
    ///
    /// The dashboard does not autoscale. The ranges are tuned for normal
    /// operation; fault-scenario waveforms intentionally push off-scale.
    pub const fn display_range(&self) -> (f32, f32) {
        match self {
            Channel::Acceleration => (1000.0, 2000.0),
            Channel::Strain => (-300.0, 300.0),
            Channel::Microphone => (-15000.0, 15000.0),
            Channel::Temperature => (3300.0, 3600.0),
            Channel::Tachometer => (-1.0, 6.0),
        }
    }

    /// Index of the channel in display order.
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_channel_once() {
        for (i, ch) in Channel::ALL.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
        assert_eq!(Channel::ALL.len(), CHANNEL_COUNT);
    }

    #[test]
    fn names_and_units_are_nonempty() {
        for ch in Channel::ALL {
            assert!(!ch.name().is_empty());
            assert!(!ch.unit().is_empty());
            let (lo, hi) = ch.display_range();
            assert!(lo < hi);
        }
    }
}
