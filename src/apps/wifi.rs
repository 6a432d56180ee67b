// Wi-Fi link status as seen by the buttons.  Provisioning itself (AP
// mode, credential storage) belongs to the network service; a reset
// request is recorded here for it to pick up.

use log::warn;

use super::WifiStation;

#[derive(Debug, Default)]
pub struct ProvisioningState {
    connected: bool,
    reset_requested: bool,
}

impl ProvisioningState {
    pub const fn new() -> Self {
        Self {
            connected: false,
            reset_requested: false,
        }
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Takes a pending reset request, clearing it.
    pub fn take_reset_request(&mut self) -> bool {
        core::mem::take(&mut self.reset_requested)
    }
}

impl WifiStation for ProvisioningState {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn reset_wifi_configuration(&mut self) {
        warn!("wifi: configuration reset requested");
        self.connected = false;
        self.reset_requested = true;
    }
}
