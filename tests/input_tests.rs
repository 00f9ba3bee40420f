// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn normalized_maps_corners_and_centre() {
    let rect = (100.0, 50.0, 200.0, 100.0);
    let at = |x, y| normalized_in_rect(x, y, rect.0, rect.1, rect.2, rect.3);
    assert_eq!(at(100.0, 50.0), [-1.0, -1.0]);
    assert_eq!(at(300.0, 150.0), [1.0, 1.0]);
    assert_eq!(at(200.0, 100.0), [0.0, 0.0]);
}

#[test]
fn normalized_clamps_outside_points() {
    let [x, y] = normalized_in_rect(-500.0, 9000.0, 0.0, 0.0, 100.0, 100.0);
    assert_eq!(x, -1.0);
    assert_eq!(y, 1.0);
}

#[test]
fn degenerate_rect_maps_to_centre() {
    assert_eq!(normalized_in_rect(10.0, 10.0, 0.0, 0.0, 0.0, 50.0), [0.0, 0.0]);
    assert_eq!(normalized_in_rect(10.0, 10.0, 0.0, 0.0, 50.0, -1.0), [0.0, 0.0]);
}

#[test]
fn interactive_elements_are_detected() {
    assert!(is_interactive("A", "", "auto"));
    assert!(is_interactive("button", "", "auto"));
    assert!(is_interactive("DIV", "card cursor-pointer", "auto"));
    assert!(is_interactive("SPAN", "", "pointer"));
    assert!(!is_interactive("DIV", "cursor-pointer-ish", "auto"));
    assert!(!is_interactive("P", "", "text"));
}

#[test]
fn wheel_delta_modes_scale_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, 0, 16.0, 800.0), 3.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
}
