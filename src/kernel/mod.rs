// Task layer.  The embassy executor comes from esp-rtos; the polling
// task is the only context that touches button state.

pub mod tasks;

pub use tasks::{BoardContext, BoardInput, GESTURES, WIFI_RESET, input_task};
