// What the buttons do on this board.
//
//   Vol Up    click: volume +10     long: volume 100
//   Vol Down  click: volume -10     long: mute
//   Play      click: toggle chat
//   Boot      click: toggle chat
//   Rec, Mode, Set: unbound
//
// Toggling chat while the assistant is still starting and Wi-Fi never
// came up drops the stored Wi-Fi configuration and hands the assistant to
// provisioning, so a board that cannot connect can be recovered from the
// buttons.

use core::fmt::Write;

use embedded_hal::digital::InputPin;

use crate::apps::{Application, ChatSession, DeviceState, ProvisioningState, WifiStation};
use crate::board::button::ButtonId;
use crate::board::{AudioCodec, Backlight, Board, DeviceContext, Display, Led};
use crate::drivers::input::InputDriver;
use crate::drivers::sampler::AnalogChannel;

pub const VOLUME_STEP: i16 = 10;
pub const MAX_VOLUME: u8 = 100;

pub const MSG_MAX_VOLUME: &str = "Max volume";
pub const MSG_MUTED: &str = "Muted";

impl<B, A, W> DeviceContext<B, A, W>
where
    B: Board,
    A: Application,
    W: WifiStation,
{
    /// Step the output volume, clamped to 0..=100, and show the result.
    pub fn change_volume(&mut self, delta: i16) {
        let codec = self.board.audio_codec();
        let volume = (codec.output_volume() as i16)
            .saturating_add(delta)
            .clamp(0, MAX_VOLUME as i16) as u8;
        codec.set_output_volume(volume);

        let mut text = Notice::new();
        let _ = write!(text, "Volume {volume}");
        self.board.display().show_notification(text.as_str());
    }

    pub fn set_volume(&mut self, volume: u8, message: &str) {
        self.board
            .audio_codec()
            .set_output_volume(volume.min(MAX_VOLUME));
        self.board.display().show_notification(message);
    }

    pub fn toggle_chat(&mut self) {
        if self.app.device_state() == DeviceState::Starting && !self.wifi.is_connected() {
            self.wifi.reset_wifi_configuration();
            self.app.enter_wifi_configuring();
        }
        self.app.toggle_chat_state();
        let state = self.app.device_state();
        self.board.led().on_state_changed(state);
    }

    /// Bring-up steps that follow hardware init.
    pub fn power_on(&mut self) {
        self.board.backlight().set_brightness(100);
        let state = self.app.device_state();
        self.board.led().on_state_changed(state);
    }
}

/// The context the firmware runs with.  No network service is linked in,
/// so the assistant is ready as soon as the board is powered.
pub fn start_device<B: Board>(board: B) -> DeviceContext<B, ChatSession, ProvisioningState> {
    let mut ctx = DeviceContext::new(board, ChatSession::new(), ProvisioningState::new());
    ctx.app.mark_ready();
    ctx.power_on();
    ctx
}

/// Bind the board's button handlers.  Call once before polling starts.
pub fn register_board_handlers<Adc, Pin, B, A, W>(
    input: &mut InputDriver<Adc, Pin, DeviceContext<B, A, W>>,
) where
    Adc: AnalogChannel + 'static,
    Pin: InputPin + 'static,
    B: Board + 'static,
    A: Application + 'static,
    W: WifiStation + 'static,
{
    input
        .button(ButtonId::VolUp)
        .on_click(|ctx| ctx.change_volume(VOLUME_STEP))
        .on_long_press(|ctx| ctx.set_volume(MAX_VOLUME, MSG_MAX_VOLUME));

    input
        .button(ButtonId::VolDown)
        .on_click(|ctx| ctx.change_volume(-VOLUME_STEP))
        .on_long_press(|ctx| ctx.set_volume(0, MSG_MUTED));

    input.button(ButtonId::Play).on_click(|ctx| ctx.toggle_chat());
    input.button(ButtonId::Boot).on_click(|ctx| ctx.toggle_chat());
}

// Fixed-size text for notifications; truncates on overflow.
struct Notice {
    buf: [u8; 32],
    len: usize,
}

impl Notice {
    const fn new() -> Self {
        Self {
            buf: [0u8; 32],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl Write for Notice {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let n = s.len().min(self.buf.len() - self.len);
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}
