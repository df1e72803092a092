//! Tapstick - unified game controller host
//!
//! Library half of the root package: configuration, window management and
//! app-level key mapping around the `tapstick_input` controller.

pub mod config;
pub mod input;
pub mod systems;
