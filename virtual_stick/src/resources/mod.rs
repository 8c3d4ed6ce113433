pub mod stick_drag;
pub mod stick_output;
pub mod stick_settings;
pub mod stick_style;
pub mod touch_frame;
