use bevy::prelude::*;

/// Sprite steered by the stick in the demo binary.
#[derive(Component)]
pub struct DemoPuck {
    pub speed: f32,
}
