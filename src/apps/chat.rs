// Chat toggle state
//
// Starting -> Idle once the rest of the firmware reports ready.
// Any state -> WifiConfiguring when the Wi-Fi configuration is dropped.
// Toggle:  Idle -> Listening,  Listening | Speaking -> Idle,
//          Activating -> Idle.  Every other state ignores it.

use log::info;

use super::{Application, DeviceState};

pub struct ChatSession {
    state: DeviceState,
}

impl ChatSession {
    pub const fn new() -> Self {
        Self {
            state: DeviceState::Starting,
        }
    }

    pub fn mark_ready(&mut self) {
        if self.state == DeviceState::Starting {
            self.set_state(DeviceState::Idle);
        }
    }

    fn set_state(&mut self, next: DeviceState) {
        if next != self.state {
            info!("app: {} -> {}", self.state, next);
            self.state = next;
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Application for ChatSession {
    fn device_state(&self) -> DeviceState {
        self.state
    }

    fn toggle_chat_state(&mut self) {
        match self.state {
            DeviceState::Idle => self.set_state(DeviceState::Listening),
            DeviceState::Listening | DeviceState::Speaking | DeviceState::Activating => {
                self.set_state(DeviceState::Idle)
            }
            other => info!("app: toggle ignored while {}", other),
        }
    }

    fn enter_wifi_configuring(&mut self) {
        self.set_state(DeviceState::WifiConfiguring);
    }
}
