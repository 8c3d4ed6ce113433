pub mod demo_puck;
pub mod stick_head;
pub mod stick_parts;
pub mod virtual_stick;
