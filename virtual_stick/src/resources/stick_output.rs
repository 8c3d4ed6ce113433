use bevy::prelude::*;

use crate::prelude::virtual_stick::StickInputSource;

/// The public state of the virtual stick.
/// Read this from movement systems that don't want to query the stick entity.
#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct StickOutput {
    /// Deflection ranging from -1.0 to 1.0 on each axis, y pointing up.
    /// (0,0) is the idle state.
    pub dir: Vec2,

    /// Whether a finger is currently latched onto a stick.
    pub tracking: bool,
}

impl StickInputSource for StickOutput {
    fn stick_input(&self) -> Vec2 {
        self.dir
    }
}
