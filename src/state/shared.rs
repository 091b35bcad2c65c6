//! Process-wide gear state shared between the sensor task and the
//! display loop.
//!
//! The whole [`GearState`] packs into one byte, so a single `AtomicU8`
//! is enough: the display reads it with one load and can never see a
//! half-applied event. Only the sensor task writes.

use core::sync::atomic::{AtomicU8, Ordering};

use super::{GearState, ReverseToggle, SensorSnapshot, Transition};
use crate::gear::Gear;

pub struct SharedGearState {
    bits: AtomicU8,
}

impl SharedGearState {
    /// Starts at [`GearState::INITIAL`]. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            bits: AtomicU8::new(GearState::INITIAL.to_bits()),
        }
    }

    /// Atomic snapshot of the full state.
    pub fn load(&self) -> GearState {
        GearState::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Current gear, from one atomic read.
    pub fn gear(&self) -> Gear {
        self.load().gear()
    }

    pub fn store(&self, state: GearState) {
        self.bits.store(state.to_bits(), Ordering::Release);
    }

    /// Run one sensor event against the stored state and publish the
    /// result.
    ///
    /// Load and store are separate, so this must only ever be called from
    /// a single writer (the sensor task).
    pub fn apply(&self, snapshot: SensorSnapshot, toggle: ReverseToggle) -> Transition {
        let before = self.load();
        let after = before.on_sensor_event(snapshot, toggle);
        self.store(after);
        before.diff(&after)
    }
}

impl Default for SharedGearState {
    fn default() -> Self {
        Self::new()
    }
}
