use bevy::prelude::*;

const BACKGROUND_COLOR: Color = Color::srgb(0.15, 0.17, 0.2);

// Window setup for the demo binary

pub(crate) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(demo_window()),
            ..default()
        }));
}

fn demo_window() -> Window {
    Window {
        title: "Virtual Stick".into(),
        resolution: (800, 600).into(),
        ..default()
    }
}
