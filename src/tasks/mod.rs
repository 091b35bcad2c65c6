//! Firmware tasks (embedded build only).
//!
//! - `sensors`: waits for an edge on any input and feeds the state machine
//! - `display`: startup animation and the periodic refresh loop

pub mod display;
pub mod sensors;
