//! Native gamepad backend using gilrs

use gilrs::{Axis, Button, EventType, Gilrs};

use crate::gamepad::{GamepadBackend, GamepadError, GamepadSnapshot};

/// Gamepad backend reading the first connected pad through gilrs
pub struct GilrsBackend {
    gilrs: Gilrs,
}

impl GilrsBackend {
    pub fn new() -> Result<Self, GamepadError> {
        let gilrs = match Gilrs::new() {
            Ok(gilrs) => gilrs,
            Err(gilrs::Error::NotImplemented(_)) => return Err(GamepadError::Unsupported),
            Err(e) => return Err(GamepadError::InitFailed(e.to_string())),
        };

        for (id, gamepad) in gilrs.gamepads() {
            log::info!("Gamepad {:?} connected: {}", id, gamepad.name());
        }

        Ok(Self { gilrs })
    }
}

impl GamepadBackend for GilrsBackend {
    fn first_gamepad(&self) -> Option<GamepadSnapshot> {
        let (_, gamepad) = self.gilrs.gamepads().next()?;
        Some(snapshot_from_values(
            gamepad.value(Axis::LeftStickX),
            gamepad.value(Axis::LeftStickY),
            gamepad.is_pressed(Button::South),
        ))
    }

    fn pump(&mut self) {
        while let Some(event) = self.gilrs.next_event() {
            match event.event {
                EventType::Connected => {
                    let name = self.gilrs.gamepad(event.id).name().to_string();
                    log::info!("Gamepad {:?} connected: {}", event.id, name);
                }
                EventType::Disconnected => {
                    log::info!("Gamepad {:?} disconnected", event.id);
                }
                other => log::trace!("Gamepad {:?} event: {:?}", event.id, other),
            }
        }
    }

    fn name(&self) -> &str {
        "gilrs"
    }
}

/// Build a snapshot from gilrs values
///
/// gilrs reports the stick y axis up-positive; snapshots are down-positive.
fn snapshot_from_values(stick_x: f32, stick_y: f32, south: bool) -> GamepadSnapshot {
    GamepadSnapshot::new(vec![stick_x, -stick_y], vec![south])
}
