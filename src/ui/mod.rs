//! Hardware-facing user interface - seven-segment display + sensor lines.
//!
//! Both drivers are generic over the `embedded-hal` 1.0 digital traits, so
//! the firmware passes in `embassy_nrf` pins and the tests pass in mocks.
//!
//! ## Components
//!
//! - **Display**: 7 push-pull lines, one per segment (A..G), active-high
//! - **Sensors**: 2 buttons + neutral switch + 2 Hall sensors, active-low

pub mod display;
pub mod sensors;

pub use display::SegmentDisplay;
pub use sensors::SensorInputs;
