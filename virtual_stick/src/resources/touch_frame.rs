use bevy::prelude::*;

/// One active touch as seen during the current frame.
///
/// Coordinates are logical pixels with y pointing up.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TouchSample {
    pub id: u64,
    pub position: Vec2,
    /// Movement since the previous frame.
    pub delta: Vec2,
}

impl TouchSample {
    pub fn new(id: u64, position: Vec2, delta: Vec2) -> Self {
        Self { id, position, delta }
    }

    /// Converts window coordinates (y down) into stick space (y up).
    pub fn from_window(id: u64, position: Vec2, delta: Vec2) -> Self {
        Self::new(id, flip_y(position), flip_y(delta))
    }
}

fn flip_y(v: Vec2) -> Vec2 {
    Vec2::new(v.x, -v.y)
}

/// Snapshot of every active touch, refreshed once per frame before the sticks tick.
#[derive(Resource, Reflect, Debug, Default)]
#[reflect(Resource)]
pub struct TouchFrame {
    touches: Vec<TouchSample>,
}

impl TouchFrame {
    pub fn touches(&self) -> &[TouchSample] {
        &self.touches
    }

    pub fn replace(&mut self, touches: impl IntoIterator<Item = TouchSample>) {
        self.touches.clear();
        self.touches.extend(touches);
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }
}
