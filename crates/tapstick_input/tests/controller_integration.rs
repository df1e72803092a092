//! Integration tests for the unified controller
//!
//! These tests drive the public API the way a host event loop does:
//! 1. Events mutate state between frames
//! 2. Each frame pumps gamepads and polls move/trigger
//! 3. Devices appear and disappear without errors

use tapstick_input::{
    GamepadBackend, GamepadSnapshot, InputManager, StaticGamepad, TouchPoint,
};
use tapstick_math::Vec2;
use winit::event::{ElementState, TouchPhase};
use winit::keyboard::KeyCode;

const EPSILON: f32 = 0.0001;

/// Backend whose pad connects after a number of pumps
struct LateGamepad {
    pumps_until_connected: u32,
    pad: GamepadSnapshot,
}

impl GamepadBackend for LateGamepad {
    fn first_gamepad(&self) -> Option<GamepadSnapshot> {
        if self.pumps_until_connected == 0 {
            Some(self.pad.clone())
        } else {
            None
        }
    }

    fn pump(&mut self) {
        self.pumps_until_connected = self.pumps_until_connected.saturating_sub(1);
    }

    fn name(&self) -> &str {
        "late"
    }
}

// ==================== Frame Loop Tests ====================

#[test]
fn test_frame_loop_with_hotplugged_gamepad() {
    let mut input = InputManager::new(Box::new(LateGamepad {
        pumps_until_connected: 2,
        pad: GamepadSnapshot::new(vec![-1.0, 0.0], vec![true]),
    }));

    // Frame 1: nothing connected yet
    input.pump_gamepads();
    assert_eq!(input.move_vector(), Vec2::ZERO);
    assert!(!input.trigger());

    // Frame 2: pad arrives
    input.pump_gamepads();
    assert!(input.move_vector().approx_eq(Vec2::new(-1.0, 0.0), EPSILON));
    assert!(input.trigger());
    assert_eq!(input.gamepad_backend().name(), "late");
}

#[test]
fn test_touch_drag_session() {
    let mut input = InputManager::default();

    // Joystick and trigger in one batch
    assert!(input.process_touches(TouchPhase::Started, &[
        TouchPoint::new(10, 100.0, 400.0),
        TouchPoint::new(11, 600.0, 400.0),
    ]));
    assert!(input.trigger());

    // Drag far to the right: stick saturates and center follows
    input.process_touches(TouchPhase::Moved, &[TouchPoint::new(10, 400.0, 400.0)]);
    assert!(input.move_vector().approx_eq(Vec2::new(1.0, 0.0), EPSILON));

    let joystick = *input.state().touch.joystick().unwrap();
    assert!(joystick.center.approx_eq(Vec2::new(330.0, 400.0), 0.01));

    // Small move back left deflects left immediately
    input.process_touches(TouchPhase::Moved, &[TouchPoint::new(10, 295.0, 400.0)]);
    assert!(input.move_vector().approx_eq(Vec2::new(-0.5, 0.0), 0.001));

    // Lift both fingers
    input.process_touches(TouchPhase::Ended, &[
        TouchPoint::new(10, 295.0, 400.0),
        TouchPoint::new(11, 600.0, 400.0),
    ]);
    assert_eq!(input.move_vector(), Vec2::ZERO);
    assert!(!input.trigger());
}

#[test]
fn test_every_source_at_once_stays_unit() {
    let mut input = InputManager::new(Box::new(
        StaticGamepad::new().with_snapshot(GamepadSnapshot::new(vec![0.0, -1.0], vec![false])),
    ));
    input.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
    input.process_touches(TouchPhase::Started, &[TouchPoint::new(1, 0.0, 0.0)]);
    input.process_touches(TouchPhase::Moved, &[TouchPoint::new(1, 0.0, -200.0)]);

    let v = input.move_vector();
    assert!(v.approx_eq(Vec2::new(0.0, -1.0), EPSILON));
}

#[test]
fn test_trigger_truth_table() {
    for key in [false, true] {
        for touch in [false, true] {
            for button in [false, true] {
                let mut input = InputManager::new(Box::new(
                    StaticGamepad::new().with_snapshot(GamepadSnapshot::new(vec![], vec![button])),
                ));
                if key {
                    input.process_keyboard(KeyCode::Space, ElementState::Pressed);
                }
                if touch {
                    input.process_touches(TouchPhase::Started, &[
                        TouchPoint::new(1, 0.0, 0.0),
                        TouchPoint::new(2, 0.0, 0.0),
                    ]);
                }
                assert_eq!(
                    input.trigger(),
                    key || touch || button,
                    "key={} touch={} button={}", key, touch, button
                );
            }
        }
    }
}

#[test]
fn test_configured_radius_and_deadzone() {
    let mut input = InputManager::new(Box::new(
        StaticGamepad::new().with_snapshot(GamepadSnapshot::new(vec![0.2, 0.0], vec![])),
    ))
    .with_joystick_radius(20.0)
    .with_deadzone(0.25);

    // Stick inside the wider deadzone contributes nothing
    assert_eq!(input.move_vector(), Vec2::ZERO);

    input.process_touches(TouchPhase::Started, &[TouchPoint::new(1, 0.0, 0.0)]);
    input.process_touches(TouchPhase::Moved, &[TouchPoint::new(1, 10.0, 0.0)]);
    assert!(input.move_vector().approx_eq(Vec2::new(0.5, 0.0), EPSILON));
}
