//! Display sequencing: startup light chase, then a fixed-rate refresh.

use defmt::{info, warn};
use embassy_nrf::gpio::Output;
use embassy_time::{Duration, Timer};
use gearpos::config::REFRESH_INTERVAL_MS;
use gearpos::ui::SegmentDisplay;
use gearpos::{encode, startup, SegmentPattern, SharedGearState};

/// Concrete display type for the nRF52840 board.
pub type Display = SegmentDisplay<Output<'static>>;

/// Write a glyph, logging (not propagating) a GPIO failure. The next
/// refresh rewrites every line anyway.
fn show(display: &mut Display, pattern: SegmentPattern) {
    if let Err(e) = display.show(pattern) {
        warn!("Display: write failed: {}", e);
    }
}

/// Play the power-on animation to completion.
pub async fn play_startup(display: &mut Display) {
    info!("Display: startup sequence ({} ms)", startup::duration_ms());
    for frame in startup::frames() {
        show(display, frame.pattern);
        if frame.hold_ms > 0 {
            Timer::after(Duration::from_millis(frame.hold_ms)).await;
        }
    }
}

/// Show the current gear every [`REFRESH_INTERVAL_MS`]. Never returns and
/// never touches the state except to read it.
pub async fn refresh_loop(display: &mut Display, state: &'static SharedGearState) -> ! {
    loop {
        let gear = state.gear();
        show(display, encode(gear.raw()));
        Timer::after(Duration::from_millis(REFRESH_INTERVAL_MS)).await;
    }
}
