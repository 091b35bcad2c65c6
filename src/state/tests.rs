//! Unit tests for the gear state machine.
//!
//! These tests run on the host (not embedded) and cover the shift rules,
//! the lockout, the reverse toggle and the per-event check order.

use super::{GearState, ReverseToggle, SensorSnapshot};
use crate::gear::{Gear, MAX_GEAR};
use proptest::prelude::*;

fn gear(n: u8) -> Gear {
    Gear::engaged(n).unwrap()
}

fn up() -> SensorSnapshot {
    SensorSnapshot {
        hall_up: true,
        ..Default::default()
    }
}

fn down() -> SensorSnapshot {
    SensorSnapshot {
        hall_down: true,
        ..Default::default()
    }
}

fn step(state: GearState, snap: SensorSnapshot) -> GearState {
    state.on_sensor_event(snap, ReverseToggle::EveryEvent)
}

// ═══════════════════════════════════════════════════════════════════════════
// Shifting
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn initial_state_is_neutral_unlocked_forward() {
    let s = GearState::new();
    assert_eq!(s.gear(), Gear::NEUTRAL);
    assert!(!s.locked());
    assert!(!s.reversed());
    assert_eq!(s, GearState::default());
}

#[test]
fn hall_up_shifts_up() {
    let s = step(GearState::new(), up());
    assert_eq!(s.gear(), gear(2));
    let s = step(s, up());
    assert_eq!(s.gear(), gear(3));
}

#[test]
fn hall_down_shifts_down_through_neutral() {
    let s = GearState::with(gear(3), false, false);
    let s = step(s, down());
    assert_eq!(s.gear(), gear(2));
    let s = step(s, down());
    assert_eq!(s.gear(), Gear::NEUTRAL);
    let s = step(s, down());
    assert_eq!(s.gear(), gear(1));
    let s = step(s, down());
    assert_eq!(s.gear(), gear(1));
}

#[test]
fn held_hall_up_retriggers_every_event_until_top() {
    let mut s = GearState::new();
    for _ in 0..3 {
        s = step(s, up());
    }
    assert_eq!(s.gear(), gear(4));
    for _ in 0..10 {
        s = step(s, up());
    }
    assert_eq!(s.gear(), gear(MAX_GEAR));
}

#[test]
fn quiet_event_changes_nothing() {
    let s = GearState::with(gear(4), false, true);
    assert_eq!(step(s, SensorSnapshot::default()), s);
}

// ═══════════════════════════════════════════════════════════════════════════
// Lockout
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn lock_blocks_both_hall_sensors_in_both_directions() {
    for reversed in [false, true] {
        let s = GearState::with(gear(3), false, reversed);
        for snap in [up(), down()] {
            let locked = SensorSnapshot { lock: true, ..snap };
            let next = step(s, locked);
            assert_eq!(next.gear(), gear(3));
            assert!(next.locked());
        }
    }
}

#[test]
fn lock_follows_button_level() {
    let s = step(GearState::new(), SensorSnapshot { lock: true, ..Default::default() });
    assert!(s.locked());
    let s = step(s, SensorSnapshot::default());
    assert!(!s.locked());
}

#[test]
fn releasing_lock_in_same_event_allows_shift() {
    let s = GearState::with(gear(3), true, false);
    let s = step(s, up());
    assert!(!s.locked());
    assert_eq!(s.gear(), gear(4));
}

#[test]
fn neutral_sensor_wins_even_when_locked() {
    let s = GearState::with(gear(5), true, false);
    let s = step(s, SensorSnapshot { lock: true, neutral: true, ..Default::default() });
    assert_eq!(s.gear(), Gear::NEUTRAL);
}

// ═══════════════════════════════════════════════════════════════════════════
// Reverse toggle
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn reverse_swaps_sensor_meaning() {
    let s = GearState::with(gear(3), false, true);
    assert_eq!(step(s, up()).gear(), gear(2));
    assert_eq!(step(s, down()).gear(), gear(4));
}

#[test]
fn two_reverse_events_restore_original() {
    let press = SensorSnapshot { reverse: true, ..Default::default() };
    let s = step(GearState::new(), press);
    assert!(s.reversed());
    let s = step(s, press);
    assert!(!s.reversed());
}

#[test]
fn on_press_toggles_once_while_held() {
    let press = SensorSnapshot { reverse: true, ..Default::default() };
    let mut s = GearState::new();
    for _ in 0..5 {
        s = s.on_sensor_event(press, ReverseToggle::OnPress);
    }
    assert!(s.reversed());

    s = s.on_sensor_event(SensorSnapshot::default(), ReverseToggle::OnPress);
    assert!(s.reversed());
    s = s.on_sensor_event(press, ReverseToggle::OnPress);
    assert!(!s.reversed());
}

#[test]
fn on_press_held_reverse_with_hall_edges() {
    // Lever movements while the button stays held must not keep flipping.
    let held_up = SensorSnapshot { reverse: true, hall_up: true, ..Default::default() };
    let s = GearState::with(gear(4), false, false);
    let s = s.on_sensor_event(held_up, ReverseToggle::OnPress);
    assert!(s.reversed());
    assert_eq!(s.gear(), gear(3));
    let s = s.on_sensor_event(held_up, ReverseToggle::OnPress);
    assert!(s.reversed());
    assert_eq!(s.gear(), gear(2));
}

#[test]
fn every_event_flips_on_each_held_sample() {
    let held_up = SensorSnapshot { reverse: true, hall_up: true, ..Default::default() };
    let s = step(GearState::with(gear(4), false, false), held_up);
    assert!(s.reversed());
    assert_eq!(s.gear(), gear(3));
    let s = step(s, held_up);
    assert!(!s.reversed());
    assert_eq!(s.gear(), gear(4));
}

// ═══════════════════════════════════════════════════════════════════════════
// Check order within one event
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn neutral_then_up_lands_on_second() {
    let s = GearState::with(gear(5), false, false);
    let s = step(s, SensorSnapshot { neutral: true, hall_up: true, ..Default::default() });
    assert_eq!(s.gear(), gear(2));
}

#[test]
fn neutral_and_both_halls_returns_to_neutral() {
    let all = SensorSnapshot {
        neutral: true,
        hall_up: true,
        hall_down: true,
        ..Default::default()
    };
    let s = step(GearState::with(gear(4), false, false), all);
    assert_eq!(s.gear(), Gear::NEUTRAL);
}

#[test]
fn both_halls_without_neutral_cancel_out_mid_box() {
    let both = SensorSnapshot { hall_up: true, hall_down: true, ..Default::default() };
    assert_eq!(step(GearState::with(gear(4), false, false), both).gear(), gear(4));
    // Top gear clamps the up-shift, so the down-shift wins.
    assert_eq!(step(GearState::with(gear(6), false, false), both).gear(), gear(5));
}

#[test]
fn reverse_is_applied_before_hall_sensors() {
    let snap = SensorSnapshot { reverse: true, hall_down: true, ..Default::default() };
    let s = step(GearState::with(gear(3), false, false), snap);
    assert!(s.reversed());
    assert_eq!(s.gear(), gear(4));
}

// ═══════════════════════════════════════════════════════════════════════════
// Port decoding, packing, transitions
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn port_bits_are_active_low() {
    assert_eq!(SensorSnapshot::from_port_bits(0xFF), SensorSnapshot::default());
    let all = SensorSnapshot::from_port_bits(0b1100_0001);
    assert!(all.lock && all.reverse && all.neutral && all.hall_up && all.hall_down);
}

#[test]
fn port_bits_follow_pb_layout() {
    let only = |bit: u8| SensorSnapshot::from_port_bits(!(1 << bit));
    assert_eq!(only(1), SensorSnapshot { lock: true, ..Default::default() });
    assert_eq!(only(2), SensorSnapshot { neutral: true, ..Default::default() });
    assert_eq!(only(3), SensorSnapshot { reverse: true, ..Default::default() });
    assert_eq!(only(4), up());
    assert_eq!(only(5), down());
    assert_eq!(only(0), SensorSnapshot::default());
    assert_eq!(only(7), SensorSnapshot::default());
}

#[test]
fn packing_is_lossless_for_reachable_states() {
    let gears = (1..=MAX_GEAR).map(gear).chain([Gear::NEUTRAL]);
    for g in gears {
        for locked in [false, true] {
            for reversed in [false, true] {
                let s = GearState::with(g, locked, reversed);
                assert_eq!(GearState::from_bits(s.to_bits()), s);
            }
        }
    }
}

#[test]
fn unpacking_bad_gear_nibble_gives_neutral() {
    assert_eq!(GearState::from_bits(0x00).gear(), Gear::NEUTRAL);
    assert_eq!(GearState::from_bits(0x0F).gear(), Gear::NEUTRAL);
    assert!(GearState::from_bits(0x10).locked());
}

#[test]
fn diff_reports_changes() {
    let before = GearState::new();
    let after = step(before, SensorSnapshot { reverse: true, hall_up: true, ..Default::default() });
    let t = before.diff(&after);
    assert_eq!(t.from, Gear::NEUTRAL);
    assert_eq!(t.to, gear(1));
    assert!(t.gear_changed());
    assert!(t.reverse_changed);
    assert!(!t.lock_changed);
    assert!(!t.is_quiet());
}

// ═══════════════════════════════════════════════════════════════════════════
// Invariants over arbitrary event sequences
// ═══════════════════════════════════════════════════════════════════════════

fn any_snapshot() -> impl Strategy<Value = SensorSnapshot> {
    any::<u8>().prop_map(SensorSnapshot::from_port_bits)
}

fn any_toggle() -> impl Strategy<Value = ReverseToggle> {
    prop_oneof![Just(ReverseToggle::EveryEvent), Just(ReverseToggle::OnPress)]
}

proptest! {
    #[test]
    fn gear_always_in_range(
        snaps in prop::collection::vec(any_snapshot(), 0..64),
        toggle in any_toggle()
    ) {
        let mut s = GearState::new();
        for snap in snaps {
            s = s.on_sensor_event(snap, toggle);
            let raw = s.gear().raw();
            prop_assert!((1..=MAX_GEAR + 1).contains(&raw));
            prop_assert_eq!(GearState::from_bits(s.to_bits()), s);
        }
    }

    #[test]
    fn locked_snapshot_without_neutral_never_moves_gear(
        snaps in prop::collection::vec(any_snapshot(), 0..64),
        toggle in any_toggle()
    ) {
        let mut s = GearState::new();
        for snap in snaps {
            let next = s.on_sensor_event(snap, toggle);
            if snap.lock && !snap.neutral {
                prop_assert_eq!(next.gear(), s.gear());
            }
            s = next;
        }
    }
}
