// Startup and sampling errors
//
// ConfigError is fatal: it is raised while validating the calibration
// tables at boot and the firmware refuses to decode buttons with a bad
// table.  HardwareReadError is per-tick and only skips that sample.

use core::fmt;

use crate::board::button::ButtonId;

/// Invalid calibration or timing constants, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_mv >= max_mv`
    EmptyBand { id: ButtonId, min_mv: u16, max_mv: u16 },
    /// Two bands claim the same millivolt range.
    Overlap { first: ButtonId, second: ButtonId },
    /// The same button appears in more than one band.
    DuplicateButton(ButtonId),
    /// A band was given to a button that is not on the analog ladder.
    NotAnalog(ButtonId),
    /// Poll period, debounce window or long-press threshold is unusable.
    InvalidTiming {
        poll_ms: u32,
        debounce_ms: u32,
        long_press_ms: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyBand { id, min_mv, max_mv } => {
                write!(f, "band for {id} is empty: {min_mv}..{max_mv} mV")
            }
            ConfigError::Overlap { first, second } => {
                write!(f, "bands for {first} and {second} overlap")
            }
            ConfigError::DuplicateButton(id) => write!(f, "{id} has more than one band"),
            ConfigError::NotAnalog(id) => write!(f, "{id} is not an analog ladder button"),
            ConfigError::InvalidTiming {
                poll_ms,
                debounce_ms,
                long_press_ms,
            } => write!(
                f,
                "invalid timing: poll {poll_ms}ms, debounce {debounce_ms}ms, long press {long_press_ms}ms"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A single failed hardware sample.  The affected buttons keep their
/// state for this tick and the read is retried on the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareReadError {
    Analog,
    Digital,
}

impl fmt::Display for HardwareReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareReadError::Analog => write!(f, "ADC read failed"),
            HardwareReadError::Digital => write!(f, "GPIO read failed"),
        }
    }
}

impl core::error::Error for HardwareReadError {}
