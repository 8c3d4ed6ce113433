use bevy::prelude::*;

/// The moving indicator inside a stick region.
#[derive(Component)]
pub struct StickKnob;

#[derive(Component)]
pub struct StickDebugText;
