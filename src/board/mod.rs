//! XY DevKit v1 Board Support Package (BSP)
//!
//! Maps the physical hardware to named subsystems so that the input
//! pipeline and handlers never see a GPIO number.  The capabilities a
//! board variant offers are the [`Board`] trait; the variant compiled in
//! is [`ActiveBoard`], fixed per binary.

pub mod action;
pub mod button;
pub mod pins;
#[cfg(feature = "board")]
pub mod xy_devkit;

pub use button::{BandClassifier, ButtonId, VoltageBand, XY_DEVKIT_BANDS};

#[cfg(feature = "board")]
pub type ActiveBoard = xy_devkit::XyDevKitV1;

use crate::apps::DeviceState;

/// Status indicator.  Follows the assistant state.
pub trait Led {
    fn on_state_changed(&mut self, state: DeviceState);
}

/// Output side of the audio codec.
pub trait AudioCodec {
    /// Percent, 0..=100.
    fn output_volume(&self) -> u8;
    fn set_output_volume(&mut self, volume: u8);
}

pub trait Display {
    /// Short transient message over whatever is on screen.
    fn show_notification(&mut self, text: &str);
}

pub trait Backlight {
    /// Percent, 0..=100.
    fn set_brightness(&mut self, percent: u8);
}

/// Capabilities of one hardware variant.
///
/// Built once during board bring-up and owned by [`DeviceContext`].
pub trait Board {
    type Led: Led;
    type Codec: AudioCodec;
    type Display: Display;
    type Backlight: Backlight;

    fn led(&mut self) -> &mut Self::Led;
    fn audio_codec(&mut self) -> &mut Self::Codec;
    fn display(&mut self) -> &mut Self::Display;
    fn backlight(&mut self) -> &mut Self::Backlight;
}

/// Everything a button handler may act on.
pub struct DeviceContext<B, A, W> {
    pub board: B,
    pub app: A,
    pub wifi: W,
}

impl<B, A, W> DeviceContext<B, A, W> {
    pub fn new(board: B, app: A, wifi: W) -> Self {
        Self { board, app, wifi }
    }
}
