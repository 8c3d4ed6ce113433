use bevy::prelude::*;
use virtual_stick::DemoPlugin;

fn main() {
    App::new().add_plugins(DemoPlugin).run();
}
