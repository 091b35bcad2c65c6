//! Power-on light chase.
//!
//! Clears the display, walks a single lit segment from A to G, blanks,
//! flashes every segment, then blanks again. The firmware plays this
//! before it shows the neutral glyph and before sensor events are
//! handled.

use crate::config::STARTUP_STEP_MS;
use crate::segment::{Segment, SegmentPattern};

/// One animation step: show `pattern`, then wait `hold_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StartupFrame {
    pub pattern: SegmentPattern,
    pub hold_ms: u64,
}

impl StartupFrame {
    const fn new(pattern: SegmentPattern, hold_ms: u64) -> Self {
        Self { pattern, hold_ms }
    }
}

const FRAME_COUNT: usize = 11;

const FRAMES: [StartupFrame; FRAME_COUNT] = [
    StartupFrame::new(SegmentPattern::BLANK, 0),
    StartupFrame::new(SegmentPattern::single(Segment::A), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::B), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::C), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::D), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::E), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::F), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::single(Segment::G), STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::BLANK, STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::ALL, STARTUP_STEP_MS),
    StartupFrame::new(SegmentPattern::BLANK, 0),
];

/// The startup frames, in playback order.
pub fn frames() -> impl Iterator<Item = StartupFrame> {
    FRAMES.into_iter()
}

/// Total playback time (ms).
pub fn duration_ms() -> u64 {
    frames().map(|f| f.hold_ms).sum()
}
