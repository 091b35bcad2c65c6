//! Unified error type for gearpos.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (with the `defmt` feature) for efficient
//! on-target logging.

/// Top-level error type used across the crate.
///
/// Nothing here is fatal: the firmware logs the error and carries on, the
/// next sensor event or display refresh corrects any stale output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A raw value outside `1..=MAX_GEAR` and neutral.
    InvalidGear(u8),

    /// A GPIO read or write reported failure.
    Gpio,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidGear(raw) => write!(f, "invalid gear value {}", raw),
            Error::Gpio => f.write_str("gpio access failed"),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
