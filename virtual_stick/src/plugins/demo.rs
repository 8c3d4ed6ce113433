use bevy::prelude::*;

use crate::prelude::{demo_puck::DemoPuck, stick_output::StickOutput};

pub(crate) fn plugin(app: &mut App) {
    app
        .add_systems(Startup, (
            spawn_demo_scene,
            crate::plugins::vstick::spawn_virtual_stick,
        ))
        .add_systems(Update, steer_puck_system.after(crate::plugins::vstick::StickSystems));
}

fn spawn_demo_scene(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.spawn((
        DemoPuck { speed: 300.0 },
        Sprite::from_color(Color::srgb(0.2, 0.8, 0.4), Vec2::splat(40.0)),
        Transform::default(),
    ));
}

fn steer_puck_system(
    joy: Res<StickOutput>,
    time: Res<Time>,
    mut q_puck: Query<(&DemoPuck, &mut Transform)>,
) {
    let Ok((puck, mut transform)) = q_puck.single_mut() else { return; };

    if joy.dir.length() > 0.01 {
        transform.translation += (joy.dir * puck.speed * time.delta_secs()).extend(0.0);
    }
}
