//! Input handling module
//!
//! Provides mapping from raw key events to app-level actions.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
