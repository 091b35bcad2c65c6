//! Library interface for gearpos.
//!
//! Everything that decides what the indicator shows lives here and builds
//! for the host as well as the target: the gear state machine, the
//! segment encoder, the startup animation and the pin-generic display and
//! sensor drivers.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod gear;
pub mod segment;
pub mod startup;
pub mod state;
pub mod ui;

pub use error::{Error, Result};
pub use gear::{Gear, MAX_GEAR, NEUTRAL_RAW};
pub use segment::{encode, Segment, SegmentPattern};
pub use state::{GearState, ReverseToggle, SensorSnapshot, SharedGearState, Transition};
