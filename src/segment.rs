//! Seven-segment glyphs.
//!
//! Bit layout, LSB first: `A B C D E F G`. A set bit lights the segment.
//!
//! ```txt
//!    --A--
//!   |     |
//!   F     B
//!   |     |
//!    --G--
//!   |     |
//!   E     C
//!   |     |
//!    --D--
//! ```

use crate::gear::{Gear, NEUTRAL_RAW};

/// One display segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
}

impl Segment {
    /// All segments, in wiring order.
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// A 7-bit on/off pattern for segments A..G.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Every segment dark.
    pub const BLANK: SegmentPattern = SegmentPattern(0);
    /// Every segment lit.
    pub const ALL: SegmentPattern = SegmentPattern(0b111_1111);
    /// Lowercase `n`.
    pub const NEUTRAL: SegmentPattern = SegmentPattern(0b101_0100);
    /// `H`-shaped glyph shown for anything that is not a gear.
    pub const FALLBACK: SegmentPattern = SegmentPattern(0b111_0110);

    /// Digits 1..=6.
    const DIGITS: [SegmentPattern; 6] = [
        SegmentPattern(0b000_0110), // 1
        SegmentPattern(0b101_1011), // 2
        SegmentPattern(0b100_1111), // 3
        SegmentPattern(0b110_0110), // 4
        SegmentPattern(0b110_1101), // 5
        SegmentPattern(0b111_1101), // 6
    ];

    /// Build from raw bits; bit 7 is dropped.
    pub const fn from_bits(bits: u8) -> Self {
        SegmentPattern(bits & 0b111_1111)
    }

    /// Only `segment` lit.
    pub const fn single(segment: Segment) -> Self {
        SegmentPattern(segment.mask())
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_lit(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }

    /// Number of lit segments.
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }
}

/// Glyph for a raw gear value.
///
/// Total over `u8`: anything other than `1..=6` or neutral yields
/// [`SegmentPattern::FALLBACK`].
pub const fn encode(value: u8) -> SegmentPattern {
    match value {
        1..=6 => SegmentPattern::DIGITS[(value - 1) as usize],
        NEUTRAL_RAW => SegmentPattern::NEUTRAL,
        _ => SegmentPattern::FALLBACK,
    }
}

impl From<Gear> for SegmentPattern {
    fn from(gear: Gear) -> Self {
        encode(gear.raw())
    }
}
