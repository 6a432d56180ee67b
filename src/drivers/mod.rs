// Input drivers, board-independent.
//
// Sampling goes through the AnalogChannel / InputPin traits; only the
// pin assignments and calibration tables (in board/) are board-specific.

pub mod gesture;
pub mod input;
pub mod registry;
pub mod sampler;

pub use gesture::{Gesture, GestureDetector, Phase, Timing};
pub use input::{Event, InputDriver, ReadFailures, TickEvents};
pub use registry::{ButtonHandle, Registry};
pub use sampler::{ActiveLevel, AnalogChannel, Sampler};
