// Button input firmware for the XY DevKit v1 voice assistant (ESP32-S3)

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod apps;
pub mod board;
pub mod drivers;
pub mod error;
#[cfg(feature = "board")]
pub mod kernel;

pub use error::{ConfigError, HardwareReadError};
