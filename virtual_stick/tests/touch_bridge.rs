use bevy::input::InputPlugin;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::math::Affine2;
use bevy::prelude::*;
use bevy::ui::UiGlobalTransform;

use virtual_stick::VirtualStickPlugin;
use virtual_stick::components::virtual_stick::{StickInputSource, VirtualStick};
use virtual_stick::plugins::vstick::StickSystems;
use virtual_stick::resources::{
    stick_drag::StickDragMessage,
    stick_settings::StickSettings,
    touch_frame::{TouchFrame, TouchSample},
};

#[derive(Resource, Default)]
struct SeenDrags(Vec<StickDragMessage>);

fn record_drags(mut drags: MessageReader<StickDragMessage>, mut seen: ResMut<SeenDrags>) {
    seen.0.extend(drags.read().copied());
}

/// A stick region laid out at `center` with `size`, both in physical pixels.
fn bridge(center: Vec2, size: Vec2, inverse_scale_factor: f32) -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((InputPlugin, VirtualStickPlugin))
        .init_resource::<SeenDrags>()
        .add_systems(Update, record_drags.after(StickSystems));

    let stick = app.world_mut().spawn((
        VirtualStick::new(StickSettings::default()),
        ComputedNode { size, inverse_scale_factor, ..default() },
        UiGlobalTransform::from(Affine2::from_translation(center)),
    )).id();

    (app, stick)
}

fn touch(app: &mut App, phase: TouchPhase, id: u64, x: f32, y: f32) {
    app.world_mut().write_message(TouchInput {
        phase,
        position: Vec2::new(x, y),
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
}

fn take_drags(app: &mut App) -> Vec<StickDragMessage> {
    std::mem::take(&mut app.world_mut().resource_mut::<SeenDrags>().0)
}

fn sample(app: &App, id: u64) -> Option<TouchSample> {
    let frame = app.world().resource::<TouchFrame>();
    frame.touches().iter().find(|touch| touch.id == id).copied()
}

fn stick<'a>(app: &'a App, entity: Entity) -> &'a VirtualStick {
    app.world().get::<VirtualStick>(entity).unwrap()
}

#[test]
fn touches_flow_from_input_to_stick() {
    let (mut app, region) = bridge(Vec2::new(100.0, 500.0), Vec2::splat(200.0), 1.0);

    touch(&mut app, TouchPhase::Started, 1, 600.0, 100.0);
    touch(&mut app, TouchPhase::Started, 2, 120.0, 520.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::Begin { stick: region, touch_id: 2 }]);
    assert_eq!(sample(&app, 1), Some(TouchSample::new(1, Vec2::new(600.0, -100.0), Vec2::ZERO)));
    assert_eq!(sample(&app, 2), Some(TouchSample::new(2, Vec2::new(120.0, -520.0), Vec2::ZERO)));
    let session = stick(&app, region).session().copied().unwrap();
    assert_eq!((session.touch_id, session.origin), (2, Vec2::new(120.0, -520.0)));

    touch(&mut app, TouchPhase::Moved, 2, 170.0, 480.0);
    app.update();

    assert!(take_drags(&mut app).is_empty());
    assert_eq!(sample(&app, 2), Some(TouchSample::new(2, Vec2::new(170.0, -480.0), Vec2::new(50.0, 40.0))));
    assert_eq!(stick(&app, region).stick_input(), Vec2::new(0.25, 0.2));

    touch(&mut app, TouchPhase::Ended, 1, 600.0, 100.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::End { stick: region, touch_id: 1 }]);
    assert_eq!(sample(&app, 1), None);
    assert!(stick(&app, region).is_tracking());

    touch(&mut app, TouchPhase::Canceled, 2, 170.0, 480.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::End { stick: region, touch_id: 2 }]);
    assert!(app.world().resource::<TouchFrame>().is_empty());
    assert!(!stick(&app, region).is_tracking());
    assert_eq!(stick(&app, region).stick_input(), Vec2::ZERO);
}

#[test]
fn finger_landing_on_region_latches_while_another_is_held_elsewhere() {
    let (mut app, region) = bridge(Vec2::new(100.0, 500.0), Vec2::splat(200.0), 1.0);

    touch(&mut app, TouchPhase::Started, 1, 600.0, 100.0);
    app.update();
    assert!(take_drags(&mut app).is_empty());
    assert!(!stick(&app, region).is_tracking());

    touch(&mut app, TouchPhase::Started, 2, 100.0, 500.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::Begin { stick: region, touch_id: 2 }]);
    assert_eq!(stick(&app, region).session().map(|s| s.touch_id), Some(2));
}

#[test]
fn finger_landing_elsewhere_never_latches_while_another_rests_inside() {
    let (mut app, region) = bridge(Vec2::new(100.0, 500.0), Vec2::splat(200.0), 1.0);

    touch(&mut app, TouchPhase::Started, 1, 90.0, 510.0);
    touch(&mut app, TouchPhase::Started, 2, 600.0, 100.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::Begin { stick: region, touch_id: 1 }]);
    assert_eq!(stick(&app, region).session().map(|s| s.touch_id), Some(1));
}

#[test]
fn hit_test_scales_logical_touches_to_physical_layout() {
    // Scale factor 2: the region spans 0..400 x 800..1200 physical pixels.
    let (mut app, region) = bridge(Vec2::new(200.0, 1000.0), Vec2::splat(400.0), 0.5);

    touch(&mut app, TouchPhase::Started, 1, 260.0, 500.0);
    touch(&mut app, TouchPhase::Started, 2, 110.0, 490.0);
    app.update();

    assert_eq!(take_drags(&mut app), vec![StickDragMessage::Begin { stick: region, touch_id: 2 }]);
}
