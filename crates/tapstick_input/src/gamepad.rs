//! Gamepad reading
//!
//! Gamepads are polled rather than tracked: every read takes a fresh snapshot
//! of the first connected pad from a [`GamepadBackend`]. The backend is chosen
//! once at startup; platforms without gamepad support get [`NullGamepad`].

use tapstick_math::Vec2;

/// Stick magnitude below which input is treated as drift
pub const DEFAULT_DEADZONE: f32 = 0.15;

/// Point-in-time state of one gamepad
///
/// Axes use screen convention: the left stick is axes 0 (x, right positive)
/// and 1 (y, down positive). Button 0 is the primary face button.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub axes: Vec<f32>,
    pub buttons: Vec<bool>,
}

impl GamepadSnapshot {
    pub fn new(axes: Vec<f32>, buttons: Vec<bool>) -> Self {
        Self { axes, buttons }
    }

    /// Raw left stick, if the pad reports at least two axes
    pub fn stick(&self) -> Option<Vec2> {
        match self.axes.as_slice() {
            [x, y, ..] => Some(Vec2::new(*x, *y)),
            _ => None,
        }
    }

    /// Whether the primary button is held; false if the pad has no buttons
    pub fn primary_pressed(&self) -> bool {
        self.buttons.first().copied().unwrap_or(false)
    }

    /// Left stick with the deadzone removed, zero if the pad has no stick
    pub fn stick_input(&self, deadzone: f32) -> Vec2 {
        self.stick()
            .map(|raw| apply_deadzone(raw, deadzone))
            .unwrap_or(Vec2::ZERO)
    }
}

/// Source of gamepad snapshots
pub trait GamepadBackend {
    /// Snapshot of the first connected gamepad
    fn first_gamepad(&self) -> Option<GamepadSnapshot>;

    /// Drain pending platform events so the next snapshot is current
    fn pump(&mut self) {}

    /// Backend name for logging
    fn name(&self) -> &str;
}

/// Backend for platforms without gamepad support
#[derive(Debug, Default, Clone, Copy)]
pub struct NullGamepad;

impl GamepadBackend for NullGamepad {
    fn first_gamepad(&self) -> Option<GamepadSnapshot> {
        None
    }

    fn name(&self) -> &str {
        "none"
    }
}

/// Backend holding a snapshot set by the caller
///
/// Useful for headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct StaticGamepad {
    snapshot: Option<GamepadSnapshot>,
}

impl StaticGamepad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: start with a connected pad
    pub fn with_snapshot(mut self, snapshot: GamepadSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Replace the snapshot; `None` disconnects the pad
    pub fn set_snapshot(&mut self, snapshot: Option<GamepadSnapshot>) {
        self.snapshot = snapshot;
    }
}

impl GamepadBackend for StaticGamepad {
    fn first_gamepad(&self) -> Option<GamepadSnapshot> {
        self.snapshot.clone()
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Remove stick drift near center and rescale the rest of the range
///
/// Magnitudes below `deadzone` read as zero. Magnitudes in `[deadzone, 1]`
/// are remapped linearly onto `[0, 1]` keeping the stick direction, so a
/// stick resting exactly on the deadzone edge also reads zero.
pub fn apply_deadzone(raw: Vec2, deadzone: f32) -> Vec2 {
    let r = raw.length();
    if r < deadzone || r == 0.0 {
        return Vec2::ZERO;
    }
    let r2 = map_range(r, deadzone, 1.0, 0.0, 1.0);
    raw * (r2 / r)
}

/// Linearly map `x` from `[in_min, in_max]` onto `[out_min, out_max]`
pub fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) / (in_max - in_min) * (out_max - out_min) + out_min
}

/// Gamepad backend initialization error
#[derive(Debug)]
pub enum GamepadError {
    /// Platform has no gamepad support
    Unsupported,
    /// Backend failed to start
    InitFailed(String),
}

impl std::fmt::Display for GamepadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamepadError::Unsupported => write!(f, "Gamepads are not supported on this platform"),
            GamepadError::InitFailed(msg) => write!(f, "Gamepad backend failed to start: {}", msg),
        }
    }
}

impl std::error::Error for GamepadError {}

/// Create the gamepad backend for this build
///
/// Uses gilrs when the `gilrs` feature is enabled and it starts, otherwise
/// falls back to [`NullGamepad`].
#[cfg(feature = "gilrs")]
pub fn create_gamepad_backend() -> Box<dyn GamepadBackend> {
    match crate::gilrs_backend::GilrsBackend::new() {
        Ok(backend) => {
            log::info!("Gamepad backend: gilrs");
            Box::new(backend)
        }
        Err(e) => {
            log::warn!("{}. Gamepad input disabled.", e);
            Box::new(NullGamepad)
        }
    }
}

/// Create the gamepad backend for this build (no gamepad support compiled in)
#[cfg(not(feature = "gilrs"))]
pub fn create_gamepad_backend() -> Box<dyn GamepadBackend> {
    log::info!("Gamepad backend: none (built without gilrs)");
    Box::new(NullGamepad)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_inside_deadzone_is_zero() {
        assert_eq!(apply_deadzone(Vec2::new(0.1, 0.0), DEFAULT_DEADZONE), Vec2::ZERO);
        assert_eq!(apply_deadzone(Vec2::new(-0.08, 0.1), DEFAULT_DEADZONE), Vec2::ZERO);
    }

    #[test]
    fn test_full_deflection_unchanged() {
        let out = apply_deadzone(Vec2::new(1.0, 0.0), DEFAULT_DEADZONE);
        assert!(out.approx_eq(Vec2::new(1.0, 0.0), EPSILON));

        let out = apply_deadzone(Vec2::new(0.0, -1.0), DEFAULT_DEADZONE);
        assert!(out.approx_eq(Vec2::new(0.0, -1.0), EPSILON));
    }

    #[test]
    fn test_deadzone_edge_reads_zero() {
        // Exactly on the edge is outside the deadzone but remaps to zero
        let out = apply_deadzone(Vec2::new(0.15, 0.0), DEFAULT_DEADZONE);
        assert!(out.approx_eq(Vec2::ZERO, EPSILON));
    }

    #[test]
    fn test_rescale_keeps_direction() {
        // Halfway between deadzone and full: r = 0.575 -> r2 = 0.5
        let raw = Vec2::new(0.6, 0.8) * 0.575;
        let out = apply_deadzone(raw, DEFAULT_DEADZONE);
        assert!((out.length() - 0.5).abs() < EPSILON);
        assert!(out.normalized().approx_eq(Vec2::new(0.6, 0.8), EPSILON));
    }

    #[test]
    fn test_zero_deadzone_centered_stick() {
        let out = apply_deadzone(Vec2::ZERO, 0.0);
        assert_eq!(out, Vec2::ZERO);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(0.5, 0.0, 1.0, 0.0, 10.0), 5.0);
        assert_eq!(map_range(2.0, 1.0, 3.0, -1.0, 1.0), 0.0);
    }

    #[test]
    fn test_snapshot_missing_capabilities() {
        let empty = GamepadSnapshot::default();
        assert_eq!(empty.stick(), None);
        assert_eq!(empty.stick_input(DEFAULT_DEADZONE), Vec2::ZERO);
        assert!(!empty.primary_pressed());

        let one_axis = GamepadSnapshot::new(vec![1.0], vec![]);
        assert_eq!(one_axis.stick(), None);
    }

    #[test]
    fn test_snapshot_reads_first_stick_and_button() {
        let pad = GamepadSnapshot::new(vec![0.5, -0.25, 0.9, 0.9], vec![true, false]);
        assert_eq!(pad.stick(), Some(Vec2::new(0.5, -0.25)));
        assert!(pad.primary_pressed());

        let released = GamepadSnapshot::new(vec![], vec![false, true]);
        assert!(!released.primary_pressed());
    }

    #[test]
    fn test_null_backend_has_no_pad() {
        let mut backend = NullGamepad;
        backend.pump();
        assert!(backend.first_gamepad().is_none());
    }

    #[test]
    fn test_static_backend() {
        let mut backend = StaticGamepad::new()
            .with_snapshot(GamepadSnapshot::new(vec![0.0, 0.0], vec![true]));
        assert!(backend.first_gamepad().is_some());

        backend.set_snapshot(None);
        assert!(backend.first_gamepad().is_none());
    }
}
