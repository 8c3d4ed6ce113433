use bevy::prelude::*;

/// Drag lifecycle of a touch on a stick region.
///
/// Written by the touch capture systems, or directly by hosts that do their own hit testing.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickDragMessage {
    /// A touch went down inside `stick`'s region.
    Begin { stick: Entity, touch_id: u64 },
    /// A touch was lifted or cancelled.
    End { stick: Entity, touch_id: u64 },
}

impl StickDragMessage {
    pub fn stick(&self) -> Entity {
        match *self {
            Self::Begin { stick, .. } | Self::End { stick, .. } => stick,
        }
    }
}
