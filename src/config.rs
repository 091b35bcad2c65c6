//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters and behaviour switches
//! live here so they can be tuned in one place.

use crate::state::ReverseToggle;

// Display

/// Delay between two display refreshes (ms).
pub const REFRESH_INTERVAL_MS: u64 = 500;

/// Hold time of each startup animation frame (ms).
pub const STARTUP_STEP_MS: u64 = 200;

// Sensors

/// How the reverse button flips the up/down meaning of the Hall sensors.
///
/// The firmware toggles once per physical press; the library default
/// (`ReverseToggle::EveryEvent`) flips on every event that sees the
/// button held.
pub const REVERSE_TOGGLE: ReverseToggle = ReverseToggle::OnPress;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
// All inputs are active-low with the internal pull-up enabled.
//
//   Lock button     → P0.11
//   Reverse button  → P0.12
//   Neutral sensor  → P0.24
//   Hall UP         → P0.25
//   Hall DOWN       → P1.08
//
// Segment outputs are active-high, one line per segment.
//
//   SEG_A → P0.02    SEG_E → P0.29
//   SEG_B → P0.03    SEG_F → P0.30
//   SEG_C → P0.04    SEG_G → P0.31
//   SEG_D → P0.28

// Legacy port layout
//
// Bit positions of the inputs on the 8-bit port of the original ATmega
// board (PB1..PB5), used by `SensorSnapshot::from_port_bits`.

pub const PORT_BIT_LOCK: u8 = 1;
pub const PORT_BIT_NEUTRAL: u8 = 2;
pub const PORT_BIT_REVERSE: u8 = 3;
pub const PORT_BIT_HALL_UP: u8 = 4;
pub const PORT_BIT_HALL_DOWN: u8 = 5;
