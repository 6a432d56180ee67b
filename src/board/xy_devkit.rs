//! XY DevKit v1 (ESP32-S3) bring-up
//!
//! Everything is constructed exactly once in [`Hardware::init`] and
//! returned by value; nothing is created lazily behind an accessor.

use esp_hal::{
    Blocking,
    analog::adc::{Adc, AdcCalCurve, AdcConfig, AdcPin, Attenuation},
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    peripherals::{ADC1, GPIO6, Peripherals},
};
use log::info;

use super::{AudioCodec, Backlight, Board, Display, Led};
use crate::apps::DeviceState;
use crate::drivers::sampler::{ActiveLevel, AnalogChannel, Sampler};

pub type LadderPin = AdcPin<GPIO6<'static>, ADC1<'static>, AdcCalCurve<ADC1<'static>>>;

/// Calibrated one-shot reads of the button ladder, in millivolts.
pub struct LadderAdc {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    pin: LadderPin,
}

impl AnalogChannel for LadderAdc {
    type Error = ();

    fn read_mv(&mut self) -> nb::Result<u16, ()> {
        self.adc.read_oneshot(&mut self.pin)
    }
}

pub type BoardSampler = Sampler<LadderAdc, Input<'static>>;

/// Input subsystem hardware: ADC for the button ladder + BOOT button.
pub struct InputHw {
    pub ladder: LadderAdc,
    pub boot: Input<'static>,
}

impl InputHw {
    pub fn into_sampler(self) -> BoardSampler {
        Sampler::new(self.ladder, self.boot, ActiveLevel::Low)
    }
}

/// GPIO48 driven as a plain on/off pin: lit while the assistant listens or
/// speaks.  The board actually carries a 12-pixel addressable ring on this
/// pin; this is a stand-in until an RMT pixel driver replaces it, not a
/// driver for that ring.
pub struct StatusLed {
    pin: Output<'static>,
}

impl Led for StatusLed {
    fn on_state_changed(&mut self, state: DeviceState) {
        match state {
            DeviceState::Listening | DeviceState::Speaking => self.pin.set_high(),
            _ => self.pin.set_low(),
        }
    }
}

/// Output volume as applied by the audio path.  The ES8311 driver reads
/// it when it configures the DAC.
pub struct OutputVolume {
    volume: u8,
}

impl AudioCodec for OutputVolume {
    fn output_volume(&self) -> u8 {
        self.volume
    }

    fn set_output_volume(&mut self, volume: u8) {
        self.volume = volume;
    }
}

/// Notifications go to the log until the GC9A01 panel driver takes them.
pub struct LogDisplay;

impl Display for LogDisplay {
    fn show_notification(&mut self, text: &str) {
        info!("display: {}", text);
    }
}

/// On/off backlight; any non-zero brightness lights the panel.
pub struct PanelBacklight {
    pin: Output<'static>,
    invert: bool,
}

impl Backlight for PanelBacklight {
    fn set_brightness(&mut self, percent: u8) {
        let on = (percent > 0) != self.invert;
        self.pin.set_level(if on { Level::High } else { Level::Low });
    }
}

pub struct XyDevKitV1 {
    led: StatusLed,
    codec: OutputVolume,
    display: LogDisplay,
    backlight: PanelBacklight,
}

impl Board for XyDevKitV1 {
    type Led = StatusLed;
    type Codec = OutputVolume;
    type Display = LogDisplay;
    type Backlight = PanelBacklight;

    fn led(&mut self) -> &mut StatusLed {
        &mut self.led
    }

    fn audio_codec(&mut self) -> &mut OutputVolume {
        &mut self.codec
    }

    fn display(&mut self) -> &mut LogDisplay {
        &mut self.display
    }

    fn backlight(&mut self) -> &mut PanelBacklight {
        &mut self.backlight
    }
}

pub const DEFAULT_VOLUME: u8 = 70;

/// Complete board hardware, ready for driver initialization.
pub struct Hardware {
    pub input: InputHw,
    pub board: XyDevKitV1,
}

impl Hardware {
    pub fn init(p: Peripherals) -> Self {
        let mut adc_cfg = AdcConfig::new();

        // 11dB attenuation for the full 0-3.1V ladder range
        let pin = adc_cfg.enable_pin_with_cal::<_, AdcCalCurve<ADC1>>(p.GPIO6, Attenuation::_11dB);
        let adc = Adc::new(p.ADC1, adc_cfg);
        let boot = Input::new(p.GPIO0, InputConfig::default().with_pull(Pull::Up));
        let input = InputHw {
            ladder: LadderAdc { adc, pin },
            boot,
        };

        let backlight_off = if super::pins::DISPLAY_BACKLIGHT_INVERT {
            Level::High
        } else {
            Level::Low
        };
        let backlight = PanelBacklight {
            pin: Output::new(p.GPIO42, backlight_off, OutputConfig::default()),
            invert: super::pins::DISPLAY_BACKLIGHT_INVERT,
        };
        let led = StatusLed {
            pin: Output::new(p.GPIO48, Level::Low, OutputConfig::default()),
        };
        info!("board: xy-devkit-v1 peripherals up");

        Hardware {
            input,
            board: XyDevKitV1 {
                led,
                codec: OutputVolume {
                    volume: DEFAULT_VOLUME,
                },
                display: LogDisplay,
                backlight,
            },
        }
    }
}
