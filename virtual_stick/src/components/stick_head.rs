use bevy::prelude::*;

/// Below this range radius the head is not drawn at all.
pub const MIN_RANGE_RADIUS: f32 = 0.1;

/// Visual follower of a stick living on the same entity.
///
/// Holds no input state of its own: every frame it reads the sibling
/// [`StickInputSource`](crate::prelude::virtual_stick::StickInputSource) and
/// writes to its targets.
#[derive(Component, Reflect, Debug, Clone)]
#[reflect(Component)]
pub struct StickHead {
    /// Node offset from the region's center by the scaled input.
    pub knob: Option<Entity>,

    /// Text that receives the raw input.
    pub debug_text: Option<Entity>,

    /// Half the region's width in logical pixels, measured after layout.
    pub range_radius: f32,

    pub shows_stick_head: bool,
    pub shows_debug_text: bool,
}

impl Default for StickHead {
    fn default() -> Self {
        Self {
            knob: None,
            debug_text: None,
            range_radius: 0.0,
            shows_stick_head: true,
            shows_debug_text: true,
        }
    }
}

impl StickHead {
    /// Head offset for `input`, y pointing up. `None` while the range is degenerate.
    pub fn offset(&self, input: Vec2) -> Option<Vec2> {
        (self.range_radius >= MIN_RANGE_RADIUS).then(|| input * self.range_radius)
    }
}

/// Human readable form of a stick input, e.g. `(0.5, -1.0)`.
pub fn debug_label(input: Vec2) -> String {
    format!("({:.1}, {:.1})", input.x, input.y)
}
