//! Keyboard tracking
//!
//! Keeps the set of physical keys currently held down.

use std::collections::HashSet;

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Key that fires the trigger
pub const FIRE_KEY: KeyCode = KeyCode::Space;

/// Set of currently pressed keys
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    pressed: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a key transition
    ///
    /// Returns true when the host should not apply its own handling for this
    /// event (currently only a fire key press).
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match state {
            ElementState::Pressed => self.key_down(key),
            ElementState::Released => {
                self.key_up(key);
                false
            }
        }
    }

    /// Record a key press
    pub fn key_down(&mut self, key: KeyCode) -> bool {
        if self.pressed.insert(key) {
            log::trace!("Key down: {:?}", key);
        }
        key == FIRE_KEY
    }

    /// Record a key release
    pub fn key_up(&mut self, key: KeyCode) {
        if self.pressed.remove(&key) {
            log::trace!("Key up: {:?}", key);
        }
    }

    /// Check if a key is currently held
    pub fn is_down(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Number of keys currently held
    pub fn pressed_count(&self) -> usize {
        self.pressed.len()
    }

    /// Release every key
    ///
    /// Used when the window loses focus and key-up events will never arrive.
    pub fn release_all(&mut self) {
        if !self.pressed.is_empty() {
            log::debug!("Releasing {} held keys", self.pressed.len());
            self.pressed.clear();
        }
    }
}
