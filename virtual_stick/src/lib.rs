#![allow(unused_imports)]

use bevy::prelude::*;

pub mod components;
pub mod plugins;
pub mod resources;

pub mod prelude {
    pub use super::*;
    pub use {components::*, plugins::*, resources::*};
}

/// Virtual stick input: touch capture, stick tracking and stick head rendering.
///
/// Works without a window; when no `Touches` resource exists, feed
/// [`TouchFrame`](resources::touch_frame::TouchFrame) and
/// [`StickDragMessage`](resources::stick_drag::StickDragMessage) yourself.
pub struct VirtualStickPlugin;

impl Plugin for VirtualStickPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            plugins::vstick::plugin,
            plugins::touch_input::plugin,
        ));
    }
}

/// Windowed demo: a stick steering a sprite.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            plugins::defaults::plugin,
            VirtualStickPlugin,
            plugins::demo::plugin,
        ));
        #[cfg(feature="dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}
