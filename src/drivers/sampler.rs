// Raw button sampling: one ADC conversion for the ladder, one GPIO read
// for BOOT.  Nothing here keeps state between ticks.

use embedded_hal::digital::InputPin;
use log::debug;

use crate::error::HardwareReadError;

/// A single-shot, calibrated ADC channel reporting millivolts.
///
/// `WouldBlock` means the conversion is still running; an error means
/// the sample is lost.
pub trait AnalogChannel {
    type Error: core::fmt::Debug;

    fn read_mv(&mut self) -> nb::Result<u16, Self::Error>;
}

/// Electrical level at which the digital button counts as pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveLevel {
    Low,
    High,
}

pub struct Sampler<A, P> {
    ladder: A,
    button: P,
    active: ActiveLevel,
}

impl<A, P> Sampler<A, P>
where
    A: AnalogChannel,
    P: InputPin,
{
    pub fn new(ladder: A, button: P, active: ActiveLevel) -> Self {
        Self {
            ladder,
            button,
            active,
        }
    }

    /// Blocks for at most one conversion.
    pub fn read_analog(&mut self) -> Result<u16, HardwareReadError> {
        nb::block!(self.ladder.read_mv()).map_err(|e| {
            debug!("input: adc error {:?}", e);
            HardwareReadError::Analog
        })
    }

    /// `true` while the digital button is held.
    pub fn read_digital(&mut self) -> Result<bool, HardwareReadError> {
        let level = match self.active {
            ActiveLevel::Low => self.button.is_low(),
            ActiveLevel::High => self.button.is_high(),
        };
        level.map_err(|e| {
            debug!("input: gpio error {:?}", e);
            HardwareReadError::Digital
        })
    }
}
