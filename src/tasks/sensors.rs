//! Sensor event task.
//!
//! Replaces a pin-change interrupt handler: one task waits for an edge on
//! any of the five inputs, samples all of them together and runs the
//! state machine once. Being a single task it never re-enters itself, and
//! it is the only writer of the shared state.

use defmt::{debug, info, warn};
use embassy_futures::select::select_array;
use embassy_nrf::gpio::Input;
use gearpos::config::REVERSE_TOGGLE;
use gearpos::ui::SensorInputs;
use gearpos::SharedGearState;

#[embassy_executor::task]
pub async fn sensor_task(
    mut inputs: SensorInputs<Input<'static>>,
    state: &'static SharedGearState,
) -> ! {
    info!("Sensors: armed");

    loop {
        let edges = inputs.pins_mut().map(|pin| pin.wait_for_any_edge());
        let (_, line) = select_array(edges).await;

        let snapshot = match inputs.sample() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Sensors: read failed: {}", e);
                continue;
            }
        };
        debug!("Sensors: edge on line {}, {}", line, snapshot);

        let transition = state.apply(snapshot, REVERSE_TOGGLE);
        if transition.gear_changed() {
            info!("Gear: {} -> {}", transition.from, transition.to);
        }
        if transition.lock_changed {
            info!("Gear: lock {}", state.load().locked());
        }
        if transition.reverse_changed {
            info!("Gear: reversed {}", state.load().reversed());
        }
    }
}
