//! Gear state machine.
//!
//! The firmware's sensor task feeds every GPIO edge through
//! [`GearState::on_sensor_event`]. The function is pure: the same prior
//! state and snapshot always give the same next state, so all of the
//! shifting, lockout and reversal rules are tested on the host.

pub mod shared;

#[cfg(test)]
mod tests;

pub use shared::SharedGearState;

use crate::config;
use crate::gear::Gear;

/// Level of the five inputs at the moment of one event.
///
/// `true` means asserted. The lines are active-low, so asserted means the
/// pin reads low.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// Lock button held.
    pub lock: bool,
    /// Reverse button held.
    pub reverse: bool,
    /// Neutral sensor (gearbox neutral switch) active.
    pub neutral: bool,
    /// Upper Hall sensor active.
    pub hall_up: bool,
    /// Lower Hall sensor active.
    pub hall_down: bool,
}

impl SensorSnapshot {
    /// Decode a raw port byte wired like the original ATmega board
    /// (pull-ups, so a cleared bit is an asserted input).
    pub const fn from_port_bits(port: u8) -> Self {
        const fn low(port: u8, bit: u8) -> bool {
            port & (1 << bit) == 0
        }

        Self {
            lock: low(port, config::PORT_BIT_LOCK),
            reverse: low(port, config::PORT_BIT_REVERSE),
            neutral: low(port, config::PORT_BIT_NEUTRAL),
            hall_up: low(port, config::PORT_BIT_HALL_UP),
            hall_down: low(port, config::PORT_BIT_HALL_DOWN),
        }
    }
}

/// How the reverse button flips [`GearState::reversed`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReverseToggle {
    /// Flip on every event that sees the button held. A long press during
    /// a burst of sensor edges can flip several times.
    #[default]
    EveryEvent,
    /// Flip only when the button goes from released to held between two
    /// consecutive events.
    OnPress,
}

/// Authoritative gear indicator state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GearState {
    gear: Gear,
    locked: bool,
    reversed: bool,
    /// Reverse button level seen by the previous event.
    reverse_held: bool,
}

const BIT_LOCKED: u8 = 1 << 4;
const BIT_REVERSED: u8 = 1 << 5;
const BIT_REVERSE_HELD: u8 = 1 << 6;
const GEAR_MASK: u8 = 0x0F;

impl GearState {
    /// Power-on state: neutral, unlocked, not reversed.
    pub const INITIAL: GearState = GearState {
        gear: Gear::NEUTRAL,
        locked: false,
        reversed: false,
        reverse_held: false,
    };

    pub const fn new() -> Self {
        Self::INITIAL
    }

    /// State with an explicit gear and flags.
    pub const fn with(gear: Gear, locked: bool, reversed: bool) -> Self {
        Self {
            gear,
            locked,
            reversed,
            reverse_held: false,
        }
    }

    pub const fn gear(&self) -> Gear {
        self.gear
    }

    pub const fn locked(&self) -> bool {
        self.locked
    }

    pub const fn reversed(&self) -> bool {
        self.reversed
    }

    /// Apply one sensor event.
    ///
    /// Checks run in a fixed order, each independent of the others:
    /// lock level, reverse toggle, neutral override, Hall up, Hall down.
    /// With neutral and both Hall sensors asserted at once the box goes
    /// N, then up to 2, then back down to N.
    pub fn on_sensor_event(self, snapshot: SensorSnapshot, toggle: ReverseToggle) -> GearState {
        let mut next = self;

        next.locked = snapshot.lock;

        let flip = match toggle {
            ReverseToggle::EveryEvent => snapshot.reverse,
            ReverseToggle::OnPress => snapshot.reverse && !self.reverse_held,
        };
        if flip {
            next.reversed = !next.reversed;
        }
        next.reverse_held = snapshot.reverse;

        if snapshot.neutral {
            next.gear = Gear::NEUTRAL;
        }

        if !next.locked {
            if snapshot.hall_up {
                next.gear = if next.reversed {
                    next.gear.shift_down()
                } else {
                    next.gear.shift_up()
                };
            }
            if snapshot.hall_down {
                next.gear = if next.reversed {
                    next.gear.shift_up()
                } else {
                    next.gear.shift_down()
                };
            }
        }

        next
    }

    /// Pack into one byte: bits 0..=3 gear, 4 locked, 5 reversed,
    /// 6 reverse button held.
    pub const fn to_bits(self) -> u8 {
        let mut bits = self.gear.raw() & GEAR_MASK;
        if self.locked {
            bits |= BIT_LOCKED;
        }
        if self.reversed {
            bits |= BIT_REVERSED;
        }
        if self.reverse_held {
            bits |= BIT_REVERSE_HELD;
        }
        bits
    }

    /// Inverse of [`to_bits`](Self::to_bits). A gear nibble that is not a
    /// gear decodes as neutral.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            gear: Gear::try_from(bits & GEAR_MASK).unwrap_or(Gear::NEUTRAL),
            locked: bits & BIT_LOCKED != 0,
            reversed: bits & BIT_REVERSED != 0,
            reverse_held: bits & BIT_REVERSE_HELD != 0,
        }
    }

    /// What changed between `self` and `next`.
    pub fn diff(&self, next: &GearState) -> Transition {
        Transition {
            from: self.gear,
            to: next.gear,
            lock_changed: self.locked != next.locked,
            reverse_changed: self.reversed != next.reversed,
        }
    }
}

impl Default for GearState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Summary of one state update, for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Gear,
    pub to: Gear,
    pub lock_changed: bool,
    pub reverse_changed: bool,
}

impl Transition {
    pub fn gear_changed(&self) -> bool {
        self.from != self.to
    }

    /// Nothing visible changed.
    pub fn is_quiet(&self) -> bool {
        !self.gear_changed() && !self.lock_changed && !self.reverse_changed
    }
}
