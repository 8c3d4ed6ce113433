use bevy::prelude::*;

/// Visual configuration used by [`spawn_virtual_stick`](crate::plugins::vstick::spawn_virtual_stick).
///
/// Sizes follow the screen's `VMin` with hard pixel clamps, so the region stays
/// thumb-sized on phones without growing huge on desktop monitors.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct StickStyle {
    /// Transparency of the stick while no finger is tracked (0.0 to 1.0).
    pub alpha_idle: f32,

    /// Transparency of the stick while a finger is tracked (0.0 to 1.0).
    pub alpha_active: f32,

    /// Width/height of the interactive region relative to the smaller screen dimension.
    pub base_size_vmin: f32,

    /// Distance from the left edge of the screen in `VMin` units.
    pub pos_left_vmin: f32,

    /// Distance from the bottom edge of the screen in `VMin` units.
    pub pos_bottom_vmin: f32,

    pub base_max_px: f32,
    pub base_min_px: f32,

    /// Size of the stick head relative to the smaller screen dimension.
    pub knob_size_vmin: f32,

    pub knob_max_px: f32,
    pub knob_min_px: f32,

    pub base_color: Color,
    pub knob_color: Color,

    /// Move the stick head with the input.
    pub shows_stick_head: bool,

    /// Print the raw input under the region.
    pub shows_debug_text: bool,

    pub debug_font_size: f32,
}

impl Default for StickStyle {
    fn default() -> Self {
        Self {
            alpha_idle: 0.3,
            alpha_active: 0.8,
            base_size_vmin: 30.0,
            pos_left_vmin: 10.0,
            pos_bottom_vmin: 10.0,
            base_max_px: 250.0,
            base_min_px: 120.0,
            knob_size_vmin: 10.0,
            knob_max_px: 80.0,
            knob_min_px: 40.0,
            base_color: Color::WHITE,
            knob_color: Color::WHITE,
            shows_stick_head: true,
            shows_debug_text: true,
            debug_font_size: 16.0,
        }
    }
}

impl StickStyle {
    pub fn alpha(&self, tracking: bool) -> f32 {
        if tracking { self.alpha_active } else { self.alpha_idle }
    }
}
