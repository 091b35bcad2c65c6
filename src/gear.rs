//! Gear value and the sequential-gearbox shift rules.
//!
//! A sequential motorcycle box runs `1 - N - 2 - 3 - 4 - 5 - 6`: neutral
//! sits half a step between first and second. The raw encoding keeps the
//! classic convention of storing neutral as `MAX_GEAR + 1`.

use crate::error::Error;

/// Highest engageable gear.
pub const MAX_GEAR: u8 = 6;

/// Raw value used for neutral. Not a real gear.
pub const NEUTRAL_RAW: u8 = MAX_GEAR + 1;

/// A gear position: `1..=MAX_GEAR` or neutral.
///
/// The inner value is private so a `Gear` can never hold anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gear(u8);

impl Gear {
    /// Neutral.
    pub const NEUTRAL: Gear = Gear(NEUTRAL_RAW);
    /// First gear.
    pub const FIRST: Gear = Gear(1);
    /// Top gear.
    pub const TOP: Gear = Gear(MAX_GEAR);

    /// Engaged gear `n`, or `None` when `n` is outside `1..=MAX_GEAR`.
    pub const fn engaged(n: u8) -> Option<Gear> {
        if n >= 1 && n <= MAX_GEAR {
            Some(Gear(n))
        } else {
            None
        }
    }

    /// Raw value (`1..=MAX_GEAR`, or [`NEUTRAL_RAW`]).
    pub const fn raw(self) -> u8 {
        self.0
    }

    pub const fn is_neutral(self) -> bool {
        self.0 == NEUTRAL_RAW
    }

    /// One step up. Neutral goes to second; top gear stays put.
    pub const fn shift_up(self) -> Gear {
        if self.is_neutral() {
            Gear(2)
        } else if self.0 < MAX_GEAR {
            Gear(self.0 + 1)
        } else {
            self
        }
    }

    /// One step down. Neutral goes to first, second goes to neutral,
    /// first stays put.
    pub const fn shift_down(self) -> Gear {
        if self.is_neutral() {
            Gear(1)
        } else if self.0 == 2 {
            Gear::NEUTRAL
        } else if self.0 > 1 {
            Gear(self.0 - 1)
        } else {
            self
        }
    }
}

impl Default for Gear {
    /// Bikes are started in neutral.
    fn default() -> Self {
        Gear::NEUTRAL
    }
}

impl TryFrom<u8> for Gear {
    type Error = Error;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            NEUTRAL_RAW => Ok(Gear::NEUTRAL),
            n => Gear::engaged(n).ok_or(Error::InvalidGear(n)),
        }
    }
}

impl From<Gear> for u8 {
    fn from(gear: Gear) -> u8 {
        gear.raw()
    }
}

impl core::fmt::Display for Gear {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_neutral() {
            f.write_str("N")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
