//! GPIO |     Function       |      Notes
//! -----+--------------------+----------------------------------
//!  0   | Digital - BOOT     | Active LOW, internal pullup
//!  6   | ADC1 CH5 - Buttons | Resistor ladder: Rec/Mode/Play/Set/VolDown/VolUp
//! 42   | Display backlight  | Active HIGH
//! 48   | Status LED         | Active HIGH
//!
//! Codec I2C/I2S and the GC9A01 SPI panel are brought up by their own
//! drivers and are not listed here.

// ----- Buttons -----
pub const BTN_BOOT: u8 = 0; // Digital, active LOW
pub const BTN_LADDER_ADC: u8 = 6; // ADC1 channel 5

// ----- Display -----
pub const DISPLAY_BACKLIGHT: u8 = 42;
pub const DISPLAY_BACKLIGHT_INVERT: bool = false;

// ----- LED -----
pub const STATUS_LED: u8 = 48;

// ----- Input timing -----
pub const POLL_INTERVAL_MS: u32 = 10;
