//! Input mapping from raw events to app-level actions
//!
//! Maps keyboard input to host actions like Exit and ToggleFullscreen.
//! Controller keys (WASD, Space) are NOT mapped here - they go directly to the InputManager.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by host keys (not controller input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F11)
    ToggleFullscreen,
    /// Drop all held keys and touches (Backspace)
    ResetInput,
}

/// Maps raw key events to host actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for host keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::F11 => Some(InputAction::ToggleFullscreen),
            KeyCode::Backspace => Some(InputAction::ResetInput),
            _ => None,
        }
    }
}
