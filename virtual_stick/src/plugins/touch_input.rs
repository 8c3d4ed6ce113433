//! Bridges Bevy's [`Touches`] into the stick's per-frame input.
//!
//! Every system here tolerates a missing `Touches` resource, so the stick
//! plugin also runs headless with a hand-fed [`TouchFrame`].

use bevy::prelude::*;
use bevy::ui::UiGlobalTransform;

use crate::plugins::vstick::StickSystems;
use crate::prelude::{
    stick_drag::StickDragMessage,
    touch_frame::{TouchFrame, TouchSample},
    virtual_stick::VirtualStick,
};

pub(crate) fn plugin(app: &mut App) {
    app.add_systems(Update, (
        capture_touch_frame_system,
        detect_stick_drag_system,
    ).chain().before(StickSystems));
}

/// Snapshots every pressed touch into [TouchFrame].
fn capture_touch_frame_system(touches: Option<Res<Touches>>, mut frame: ResMut<TouchFrame>) {
    let Some(touches) = touches else { return; };

    frame.replace(
        touches
            .iter()
            .map(|touch| TouchSample::from_window(touch.id(), touch.position(), touch.delta())),
    );
}

/// Turns touches landing on a stick region into drag messages.
///
/// Each new touch is hit-tested at its own position against the region's layout.
/// Ends are sent to every stick; a stick ignores ends for fingers it doesn't track.
fn detect_stick_drag_system(
    touches: Option<Res<Touches>>,
    q_region: Query<(Entity, &ComputedNode, &UiGlobalTransform), With<VirtualStick>>,
    q_stick: Query<Entity, With<VirtualStick>>,
    mut drags: MessageWriter<StickDragMessage>,
) {
    let Some(touches) = touches else { return; };

    for touch in touches.iter_just_pressed() {
        for (stick, computed, transform) in &q_region {
            if region_contains(computed, transform, touch.position()) {
                drags.write(StickDragMessage::Begin { stick, touch_id: touch.id() });
            }
        }
    }

    for touch in touches.iter_just_released().chain(touches.iter_just_canceled()) {
        for stick in &q_stick {
            drags.write(StickDragMessage::End { stick, touch_id: touch.id() });
        }
    }
}

/// `position` is in logical window pixels; UI layout is physical.
fn region_contains(computed: &ComputedNode, transform: &UiGlobalTransform, position: Vec2) -> bool {
    let inverse_scale = computed.inverse_scale_factor();
    if !(inverse_scale > 0.0) {
        return false;
    }
    computed.contains_point(*transform, position / inverse_scale)
}
