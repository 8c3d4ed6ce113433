use bevy::app::App;
use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;

use crate::resources::stick_output::StickOutput;
use crate::resources::stick_settings::StickSettings;
use crate::resources::stick_style::StickStyle;

pub(crate) fn plugin(app: &mut App) {
    app.add_plugins((
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
        EguiPlugin::default(),
    ));

    // Settings only reach sticks spawned after the edit.
    app.add_plugins(ResourceInspectorPlugin::<StickSettings>::default());
    app.add_plugins(ResourceInspectorPlugin::<StickStyle>::default());
    app.add_plugins(ResourceInspectorPlugin::<StickOutput>::default());
}
