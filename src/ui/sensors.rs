//! Sensor and button inputs.
//!
//! Five lines, all active-low with pull-ups:
//!   - LOCK      - lock button, suppresses shifts while held
//!   - REVERSE   - reverse button, swaps the Hall sensor meaning
//!   - NEUTRAL   - gearbox neutral switch
//!   - HALL UP   - upper Hall sensor on the shift lever
//!   - HALL DOWN - lower Hall sensor on the shift lever

use embedded_hal::digital::InputPin;

use crate::error::{Error, Result};
use crate::state::SensorSnapshot;

pub struct SensorInputs<P> {
    lock: P,
    reverse: P,
    neutral: P,
    hall_up: P,
    hall_down: P,
}

impl<P: InputPin> SensorInputs<P> {
    pub fn new(lock: P, reverse: P, neutral: P, hall_up: P, hall_down: P) -> Self {
        Self {
            lock,
            reverse,
            neutral,
            hall_up,
            hall_down,
        }
    }

    /// Read all five lines into one snapshot.
    pub fn sample(&mut self) -> Result<SensorSnapshot> {
        Ok(SensorSnapshot {
            lock: asserted(&mut self.lock)?,
            reverse: asserted(&mut self.reverse)?,
            neutral: asserted(&mut self.neutral)?,
            hall_up: asserted(&mut self.hall_up)?,
            hall_down: asserted(&mut self.hall_down)?,
        })
    }

    /// Mutable access to every line, e.g. to wait for an edge on any of
    /// them.
    pub fn pins_mut(&mut self) -> [&mut P; 5] {
        [
            &mut self.lock,
            &mut self.reverse,
            &mut self.neutral,
            &mut self.hall_up,
            &mut self.hall_down,
        ]
    }
}

fn asserted<P: InputPin>(pin: &mut P) -> Result<bool> {
    pin.is_low().map_err(|_| Error::Gpio)
}
