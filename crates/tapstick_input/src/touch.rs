//! Touch tracking
//!
//! Splits a multi-touch surface into two roles:
//! - Joystick: the first contact. Its start point becomes the stick center and
//!   dragging away from it deflects the stick. Once the drag exceeds the
//!   joystick radius the center follows the finger, so the deflection never
//!   grows past the radius.
//! - Trigger: the first contact that arrives while the joystick is taken.
//!   Held for as long as that contact lasts.
//!
//! Contacts that claim neither role are ignored until they end.

use tapstick_math::Vec2;
use winit::event::{Touch, TouchPhase};

/// Maximum joystick deflection in surface units
pub const DEFAULT_JOYSTICK_RADIUS: f32 = 70.0;

/// A single contact from a touch event batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Stable identifier for the lifetime of the contact
    pub id: u64,
    /// Surface position of the contact
    pub position: Vec2,
}

impl TouchPoint {
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}

impl From<&Touch> for TouchPoint {
    fn from(touch: &Touch) -> Self {
        Self {
            id: touch.id,
            position: Vec2::new(touch.location.x as f32, touch.location.y as f32),
        }
    }
}

/// Virtual joystick bound to one contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joystick {
    pub id: u64,
    pub center: Vec2,
    pub last: Vec2,
}

impl Joystick {
    /// Offset of the contact from the stick center
    pub fn displacement(&self) -> Vec2 {
        self.last - self.center
    }

    /// Move the contact, dragging the center along when past `radius`
    fn drag_to(&mut self, position: Vec2, radius: f32) {
        self.last = position;
        let r = self.center.distance(self.last);
        if r > radius {
            // t = 0 keeps the center, t = 1 snaps it onto the contact
            let t = (r - radius) / r;
            self.center = self.center.lerp(self.last, t);
        }
    }
}

/// Joystick and trigger roles across the touch surface
#[derive(Debug, Clone)]
pub struct TouchState {
    joystick: Option<Joystick>,
    trigger_id: Option<u64>,
    radius: f32,
}

impl Default for TouchState {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchState {
    pub fn new() -> Self {
        Self {
            joystick: None,
            trigger_id: None,
            radius: DEFAULT_JOYSTICK_RADIUS,
        }
    }

    /// Builder: set the joystick radius
    ///
    /// Radii that are not finite and positive are ignored.
    pub fn with_radius(mut self, radius: f32) -> Self {
        if radius.is_finite() && radius > 0.0 {
            self.radius = radius;
        } else {
            log::warn!("Ignoring joystick radius {}, keeping {}", radius, self.radius);
        }
        self
    }

    /// Active joystick, if a contact holds the role
    pub fn joystick(&self) -> Option<&Joystick> {
        self.joystick.as_ref()
    }

    /// Identifier of the contact holding the trigger role
    pub fn trigger_id(&self) -> Option<u64> {
        self.trigger_id
    }

    /// Check whether the trigger is held by a contact
    pub fn trigger_active(&self) -> bool {
        self.trigger_id.is_some()
    }

    /// Joystick deflection scaled so the radius maps to 1.0
    pub fn stick_input(&self) -> Vec2 {
        match &self.joystick {
            Some(joystick) => joystick.displacement() / self.radius,
            None => Vec2::ZERO,
        }
    }

    /// Process a single winit touch event
    ///
    /// Always returns true: the controller claims the whole touch surface.
    pub fn process_touch(&mut self, touch: &Touch) -> bool {
        self.process_phase(touch.phase, &[TouchPoint::from(touch)])
    }

    /// Process a batch of changed contacts sharing one phase
    pub fn process_phase(&mut self, phase: TouchPhase, touches: &[TouchPoint]) -> bool {
        match phase {
            TouchPhase::Started => self.touch_start(touches),
            TouchPhase::Moved => self.touch_move(touches),
            // A cancelled contact gets no end event of its own
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_end(touches),
        }
    }

    /// New contacts claim the joystick first, then the trigger
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> bool {
        for touch in touches {
            if self.joystick.is_none() {
                log::debug!("Touch {} claimed joystick at ({:.1}, {:.1})",
                    touch.id, touch.position.x, touch.position.y);
                self.joystick = Some(Joystick {
                    id: touch.id,
                    center: touch.position,
                    last: touch.position,
                });
            } else if self.trigger_id.is_none() {
                log::debug!("Touch {} claimed trigger", touch.id);
                self.trigger_id = Some(touch.id);
            }
        }
        true
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> bool {
        let radius = self.radius;
        if let Some(joystick) = self.joystick.as_mut() {
            let id = joystick.id;
            for touch in touches.iter().filter(|t| t.id == id) {
                joystick.drag_to(touch.position, radius);
            }
        }
        true
    }

    pub fn touch_end(&mut self, touches: &[TouchPoint]) -> bool {
        for touch in touches {
            if self.joystick.is_some_and(|j| j.id == touch.id) {
                log::debug!("Touch {} released joystick", touch.id);
                self.joystick = None;
            } else if self.trigger_id == Some(touch.id) {
                log::debug!("Touch {} released trigger", touch.id);
                self.trigger_id = None;
            }
        }
        true
    }

    /// Drop both roles
    pub fn clear(&mut self) {
        self.joystick = None;
        self.trigger_id = None;
    }
}
