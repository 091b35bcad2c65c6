//! gearpos firmware - motorcycle gear-position indicator on nRF52840.
//!
//! Two Hall sensors on the shift lever, a neutral switch and two buttons
//! (lock, reverse) drive a direct-wired seven-segment display.
//!
//! Start-up order:
//!   1. configure segment outputs and sensor inputs
//!   2. play the light chase
//!   3. show neutral (bikes are started in neutral)
//!   4. spawn the sensor task
//!   5. refresh the display forever

#![no_std]
#![no_main]

mod tasks;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Input, Level, Output, OutputDrive, Pin, Pull};
use gearpos::ui::{SegmentDisplay, SensorInputs};
use gearpos::{SegmentPattern, SharedGearState};
use {defmt_rtt as _, panic_probe as _};

/// The one gear state. Written by the sensor task, read by the display.
static GEAR_STATE: SharedGearState = SharedGearState::new();

fn segment(pin: AnyPin) -> Output<'static> {
    Output::new(pin, Level::Low, OutputDrive::Standard)
}

fn sensor(pin: AnyPin) -> Input<'static> {
    Input::new(pin, Pull::Up)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("gearpos starting");

    // Pin map: see config.rs
    let mut display = SegmentDisplay::new([
        segment(p.P0_02.degrade()),
        segment(p.P0_03.degrade()),
        segment(p.P0_04.degrade()),
        segment(p.P0_28.degrade()),
        segment(p.P0_29.degrade()),
        segment(p.P0_30.degrade()),
        segment(p.P0_31.degrade()),
    ]);

    let inputs = SensorInputs::new(
        sensor(p.P0_11.degrade()),
        sensor(p.P0_12.degrade()),
        sensor(p.P0_24.degrade()),
        sensor(p.P0_25.degrade()),
        sensor(p.P1_08.degrade()),
    );

    tasks::display::play_startup(&mut display).await;
    if let Err(e) = display.show(SegmentPattern::from(GEAR_STATE.gear())) {
        defmt::warn!("Display: write failed: {}", e);
    }

    // Sensor handling starts only once the animation is over.
    unwrap!(spawner.spawn(tasks::sensors::sensor_task(inputs, &GEAR_STATE)));
    info!("gearpos running");

    tasks::display::refresh_loop(&mut display, &GEAR_STATE).await
}
