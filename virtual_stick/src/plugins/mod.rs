#[cfg(feature = "dev")]
pub mod debug;
pub mod defaults;
pub mod demo;
pub mod touch_input;
pub mod vstick;
