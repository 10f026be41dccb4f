// Host-side tests for tuning constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn party_timings_nest() {
    assert!(MESSAGE_DURATION_SEC > 0.0);
    assert!(MESSAGE_DURATION_SEC < PARTY_DURATION_SEC);
    assert!(PARTY_DURATION_SEC < TRACK_LENGTH_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn party_is_more_intense_than_rest() {
    assert!(PARTY_SPEED > CONVEYOR_SPEED);
    assert!(PARTY_BOOST > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn conveyor_layout_constants_are_sane() {
    assert!(MIN_SPACING_PX > 0.0);
    assert!(PARALLAX_GAIN_PERCENT > 0.0);
    // full parallax swing stays on screen
    assert!(BASE_CENTER_PERCENT - PARALLAX_GAIN_PERCENT / 2.0 > 0.0);
    assert!(BASE_CENTER_PERCENT + PARALLAX_GAIN_PERCENT / 2.0 < 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn starfield_fits_inside_the_camera_frustum() {
    assert!(STAR_NEAR < STAR_CAMERA_Z);
    assert!(STAR_RADIUS_MIN > STAR_CAMERA_Z);
    assert!(STAR_RADIUS_MIN + STAR_RADIUS_SPAN + STAR_CAMERA_Z < STAR_FAR);
    assert!(STAR_SPIN_Y > STAR_SPIN_X);
}

#[test]
fn decoration_lanes_are_distinct() {
    let mut f = FLOATIE_LANES.to_vec();
    f.sort_unstable();
    f.dedup();
    assert_eq!(f.len(), 6);
    let mut k = KANDI_LANES.to_vec();
    k.sort_unstable();
    k.dedup();
    assert_eq!(k.len(), 3);
}

#[test]
fn dom_ids_are_unique() {
    let mut ids = vec![
        STARFIELD_CANVAS_ID,
        SHUFFLE_BUTTON_ID,
        PARTY_BUTTON_ID,
        STOP_BUTTON_ID,
        PARTY_AUDIO_ID,
        PARTY_MESSAGE_ID,
    ];
    let n = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert!(BLOB_SELECTOR.starts_with('.'));
}

#[test]
fn chime_rejections_stay_below_the_console_level() {
    assert!(CHIME_REJECTED_LEVEL > CONSOLE_LOG_LEVEL);
    assert!(PARTY_REJECTED_LEVEL <= CONSOLE_LOG_LEVEL);
}
