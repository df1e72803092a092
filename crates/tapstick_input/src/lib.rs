//! Unified Input Handling
//!
//! This crate fuses keyboard, touchscreen and gamepad input into a single
//! polled controller exposing a movement vector and a fire trigger.

mod gamepad;
mod input_manager;
mod keyboard;
mod touch;

#[cfg(feature = "gilrs")]
mod gilrs_backend;

pub use gamepad::{
    apply_deadzone, create_gamepad_backend, map_range, GamepadBackend, GamepadError,
    GamepadSnapshot, NullGamepad, StaticGamepad, DEFAULT_DEADZONE,
};
pub use input_manager::{InputManager, InputState};
pub use keyboard::{KeyboardState, FIRE_KEY};
pub use touch::{Joystick, TouchPoint, TouchState, DEFAULT_JOYSTICK_RADIUS};

#[cfg(feature = "gilrs")]
pub use gilrs_backend::GilrsBackend;
