// Application-side collaborators the board hands button gestures to.
//
// The voice-assistant state machine and Wi-Fi provisioning live outside
// this crate; buttons only need the narrow interfaces below.  ChatSession
// and ProvisioningState are the minimal implementations the firmware
// runs with until those services are wired in.

pub mod chat;
pub mod wifi;

pub use chat::ChatSession;
pub use wifi::ProvisioningState;

/// Lifecycle states of the voice assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    Unknown,
    Starting,
    WifiConfiguring,
    Idle,
    Connecting,
    Listening,
    Speaking,
    Upgrading,
    Activating,
    FatalError,
}

impl DeviceState {
    pub const fn name(self) -> &'static str {
        match self {
            DeviceState::Unknown => "unknown",
            DeviceState::Starting => "starting",
            DeviceState::WifiConfiguring => "wifi configuring",
            DeviceState::Idle => "idle",
            DeviceState::Connecting => "connecting",
            DeviceState::Listening => "listening",
            DeviceState::Speaking => "speaking",
            DeviceState::Upgrading => "upgrading",
            DeviceState::Activating => "activating",
            DeviceState::FatalError => "fatal error",
        }
    }
}

impl core::fmt::Display for DeviceState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

pub trait Application {
    fn device_state(&self) -> DeviceState;
    fn toggle_chat_state(&mut self);
    /// Hand the device to Wi-Fi provisioning.  Chat toggles are ignored
    /// until provisioning finishes.
    fn enter_wifi_configuring(&mut self);
}

pub trait WifiStation {
    fn is_connected(&self) -> bool;
    /// Forget stored credentials and re-enter provisioning.
    fn reset_wifi_configuration(&mut self);
}
