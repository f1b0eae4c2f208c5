// Host-side tests for keyboard mapping and held-key tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/core/input.rs");
}

use input::*;

#[test]
fn flight_keys_map_case_insensitively() {
    for (key, control) in [
        ("w", Control::Forward),
        ("W", Control::Forward),
        ("s", Control::Back),
        ("a", Control::TurnLeft),
        ("D", Control::TurnRight),
        (" ", Control::Ascend),
        ("Shift", Control::Descend),
        ("shift", Control::Descend),
        ("q", Control::NightVision),
        ("E", Control::Interact),
    ] {
        assert_eq!(control_for_key(key), Some(control), "key {:?}", key);
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    for key in ["x", "Enter", "Escape", "ArrowUp", "Spacebar", "", "ww"] {
        assert_eq!(control_for_key(key), None, "key {:?}", key);
    }
}

#[test]
fn only_flight_controls_start_the_engine() {
    assert!(Control::Forward.starts_engine());
    assert!(Control::Descend.starts_engine());
    assert!(Control::Ascend.starts_engine());
    assert!(!Control::NightVision.starts_engine());
    assert!(!Control::Interact.starts_engine());
}

#[test]
fn press_reports_edges_only() {
    let mut input = InputState::default();
    assert!(input.press(Control::Interact));
    // browser key repeat
    assert!(!input.press(Control::Interact));
    assert!(input.is_held(Control::Interact));
    input.release(Control::Interact);
    assert!(!input.is_held(Control::Interact));
    assert!(input.press(Control::Interact));
}

#[test]
fn clear_drops_every_held_control() {
    let mut input = InputState::default();
    input.press(Control::Forward);
    input.press(Control::TurnLeft);
    input.clear();
    assert!(!input.is_held(Control::Forward));
    assert!(!input.is_held(Control::TurnLeft));
    // releasing an unheld control is harmless
    input.release(Control::Back);
}
