//! Direct-drive seven-segment display.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{Error, Result};
use crate::segment::{Segment, SegmentPattern};

/// Seven output lines wired to segments A..G (index 0 is A).
pub struct SegmentDisplay<P> {
    pins: [P; 7],
    shown: SegmentPattern,
}

impl<P: OutputPin> SegmentDisplay<P> {
    /// Take ownership of the segment lines. Nothing is written until the
    /// first [`show`](Self::show).
    pub fn new(pins: [P; 7]) -> Self {
        Self {
            pins,
            shown: SegmentPattern::BLANK,
        }
    }

    /// Drive every line to match `pattern`.
    pub fn show(&mut self, pattern: SegmentPattern) -> Result<()> {
        for (pin, segment) in self.pins.iter_mut().zip(Segment::ALL) {
            let state = PinState::from(pattern.is_lit(segment));
            pin.set_state(state).map_err(|_| Error::Gpio)?;
        }
        self.shown = pattern;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.show(SegmentPattern::BLANK)
    }

    /// Last pattern fully written.
    pub fn shown(&self) -> SegmentPattern {
        self.shown
    }

    /// Give the pins back.
    pub fn release(self) -> [P; 7] {
        self.pins
    }
}
