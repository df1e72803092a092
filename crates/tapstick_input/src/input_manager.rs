//! Unified controller over keyboard, touch and gamepad
//!
//! Controls:
//! - W/A/S/D: Move (y up is negative, screen convention)
//! - Space: Fire
//! - First touch: Virtual joystick
//! - Second touch: Fire
//! - Gamepad left stick: Move
//! - Gamepad south button: Fire
//!
//! Event handlers mutate the [`InputState`]; [`InputManager::move_vector`] and
//! [`InputManager::trigger`] recompute the output from it on every call.

use tapstick_math::Vec2;
use winit::event::{ElementState, Touch, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::gamepad::{GamepadBackend, NullGamepad, DEFAULT_DEADZONE};
use crate::keyboard::{KeyboardState, FIRE_KEY};
use crate::touch::{TouchPoint, TouchState};

/// Event-driven input state
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pub keyboard: KeyboardState,
    pub touch: TouchState,
}

/// Polled controller combining every input source
pub struct InputManager {
    state: InputState,
    gamepad: Box<dyn GamepadBackend>,
    deadzone: f32,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(Box::new(NullGamepad))
    }
}

impl InputManager {
    /// Create a controller reading gamepads from `gamepad`
    pub fn new(gamepad: Box<dyn GamepadBackend>) -> Self {
        log::debug!("Input manager using gamepad backend '{}'", gamepad.name());
        Self {
            state: InputState::default(),
            gamepad,
            deadzone: DEFAULT_DEADZONE,
        }
    }

    /// Builder: set the touch joystick radius
    pub fn with_joystick_radius(mut self, radius: f32) -> Self {
        self.state.touch = self.state.touch.with_radius(radius);
        self
    }

    /// Builder: set the gamepad stick deadzone
    ///
    /// Must lie in `[0, 1)`; other values are ignored.
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        if (0.0..1.0).contains(&deadzone) {
            self.deadzone = deadzone;
        } else {
            log::warn!("Ignoring gamepad deadzone {}, keeping {}", deadzone, self.deadzone);
        }
        self
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn gamepad_backend(&self) -> &dyn GamepadBackend {
        self.gamepad.as_ref()
    }

    /// Process a window event
    ///
    /// Returns true when the controller consumed the event and the host
    /// should not handle it further.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(key) => self.process_keyboard(key, event.state),
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::Touch(touch) => self.process_touch(touch),
            WindowEvent::Focused(false) => {
                self.state.keyboard.release_all();
                false
            }
            _ => false,
        }
    }

    /// Process keyboard input
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        self.state.keyboard.process_keyboard(key, state)
    }

    /// Process a single touch event
    pub fn process_touch(&mut self, touch: &Touch) -> bool {
        self.state.touch.process_touch(touch)
    }

    /// Process a batch of changed touches sharing one phase
    pub fn process_touches(&mut self, phase: TouchPhase, touches: &[TouchPoint]) -> bool {
        self.state.touch.process_phase(phase, touches)
    }

    /// Refresh gamepad state; call once per frame before reading
    pub fn pump_gamepads(&mut self) {
        self.gamepad.pump();
    }

    /// Forget all held keys and touches
    pub fn reset(&mut self) {
        self.state.keyboard.release_all();
        self.state.touch.clear();
    }

    /// Current movement vector
    ///
    /// Sum of keyboard, touch joystick and gamepad stick, scaled back to unit
    /// length when the sum is longer than 1.
    pub fn move_vector(&self) -> Vec2 {
        let keys = &self.state.keyboard;
        let mut v = Vec2::ZERO;

        if keys.is_down(KeyCode::KeyA) {
            v.x -= 1.0;
        }
        if keys.is_down(KeyCode::KeyD) {
            v.x += 1.0;
        }
        if keys.is_down(KeyCode::KeyW) {
            v.y -= 1.0;
        }
        if keys.is_down(KeyCode::KeyS) {
            v.y += 1.0;
        }

        v += self.state.touch.stick_input();

        if let Some(pad) = self.gamepad.first_gamepad() {
            v += pad.stick_input(self.deadzone);
        }

        v.clamp_length(1.0)
    }

    /// Whether fire is held on any device
    pub fn trigger(&self) -> bool {
        self.state.keyboard.is_down(FIRE_KEY)
            || self.state.touch.trigger_active()
            || self
                .gamepad
                .first_gamepad()
                .is_some_and(|pad| pad.primary_pressed())
    }
}
