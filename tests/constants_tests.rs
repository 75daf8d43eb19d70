// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use globe_core::constants as globe;

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_stays_in_unit_range() {
    assert!(AMBIENT_LIGHT.iter().all(|c| (0.0..=1.0).contains(c)));
    assert!(LIGHT_INTENSITY > 0.0 && LIGHT_INTENSITY <= 1.0);
    assert!(ALPHA_CUTOFF > 0.0 && ALPHA_CUTOFF < 0.5);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID, TITLE_ID, OVERLAY_ID, CONTENT_ID, CLOSE_ID, DARKMODE_ID, ABOUT_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(ids[i + 1..].iter().all(|b| a != b), "duplicate id {a}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_distances_are_ordered() {
    assert!(globe::MIN_DISTANCE < globe::FOCUS_DISTANCE);
    assert!(globe::FOCUS_DISTANCE < globe::REST_DISTANCE);
    assert!(globe::REST_DISTANCE < globe::SNAP_BACK_DISTANCE);
    assert!(globe::SNAP_BACK_DISTANCE < globe::INITIAL_DISTANCE);
    assert!(globe::INITIAL_DISTANCE < globe::MAX_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_out_is_faster_than_hover_in() {
    assert!(globe::HOVER_OUT_DURATION_MS < globe::HOVER_IN_DURATION_MS);
    assert!(globe::HOVER_IN_DURATION_MS < globe::FLIGHT_DURATION_MS);
}
