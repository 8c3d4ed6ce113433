use bevy::prelude::*;

/// Tracking behaviour for newly spawned sticks.
///
/// A [`VirtualStick`](crate::prelude::virtual_stick::VirtualStick) copies these values
/// when it is created. Editing the resource afterwards only affects sticks spawned later.
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct StickSettings {
    /// `true`: the touch's movement since the last frame is the input (touchpad / mouse feel).
    /// `false`: the distance from where the drag began is the input (joystick feel).
    pub uses_delta_input: bool,

    /// Drag distance from the origin, in logical pixels, that maps to full deflection.
    pub max_stick_movement: f32,

    /// Per-frame movement, in logical pixels, that maps to full deflection.
    pub max_stick_delta: f32,
}

impl Default for StickSettings {
    fn default() -> Self {
        Self {
            uses_delta_input: false,
            max_stick_movement: 200.0,
            max_stick_delta: 10.0,
        }
    }
}

impl StickSettings {
    /// The distance that maps to a deflection of length `1.0` in the selected mode.
    pub fn active_limit(&self) -> f32 {
        if self.uses_delta_input {
            self.max_stick_delta
        } else {
            self.max_stick_movement
        }
    }
}
