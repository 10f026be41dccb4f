// Host-side tests for the blob conveyor layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod conveyor {
    include!("../src/core/conveyor.rs");
}

use constants::*;
use conveyor::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_conveyor(viewport: Viewport) -> ConveyorState {
    let mut c = ConveyorState::new(ConveyorConfig::default(), viewport);
    c.speed = 0.0;
    c.offset = 0.0;
    c
}

#[test]
fn wrapped_positions_stay_on_track_for_any_offset() {
    let track = 440.0 * 6.0;
    let offsets = [
        0.0,
        -1.0,
        -440.0,
        -track,
        -track * 7.5,
        1e-9,
        -1e-9,
        track * 3.0 + 17.25,
        1e12,
        -1e12,
    ];
    for offset in offsets {
        for i in 0..6 {
            let x = wrap_position(i as f64 * 440.0 + offset, track);
            assert!(
                (0.0..track).contains(&x),
                "offset {offset} index {i} wrapped to {x}"
            );
        }
    }
}

#[test]
fn tick_keeps_every_blob_within_one_spacing_of_the_track() {
    let viewport = Viewport::new(1280.0, 720.0);
    let mut c = ConveyorState::new(ConveyorConfig::default(), viewport);
    c.speed = -37.3;
    let mut out = Vec::new();
    let spacing = spacing_for(viewport.width, 5, MIN_SPACING_PX);
    let track = spacing * 5.0;
    for _ in 0..500 {
        assert!(c.tick(viewport, 5, &mut out));
        assert_eq!(out.len(), 5);
        for p in &out {
            let on_track = p.left_px + spacing;
            assert!(on_track >= 0.0 && on_track < track, "left {}", p.left_px);
        }
    }
    assert!(c.offset < -track * 5.0);
}

#[test]
fn six_blobs_at_440_spacing_place_index_three_at_880() {
    // 1200 / 6 = 200 < 440, so spacing clamps to the minimum
    let viewport = Viewport::new(1200.0, 800.0);
    let mut c = still_conveyor(viewport);
    let mut out = Vec::new();
    assert!(c.tick(viewport, 6, &mut out));

    let spacing = spacing_for(viewport.width, 6, MIN_SPACING_PX);
    assert_eq!(spacing, 440.0);
    assert_eq!(3.0 * spacing + c.offset, 1320.0);
    assert_eq!(out[3].left_px, 880.0);
    // index 0 is pre-staged one slot off the left edge
    assert_eq!(out[0].left_px, -440.0);
}

#[test]
fn spacing_follows_viewport_width_without_a_resize_hook() {
    let mut c = still_conveyor(Viewport::new(1200.0, 800.0));
    let mut out = Vec::new();

    c.tick(Viewport::new(6000.0, 800.0), 6, &mut out);
    assert_eq!(out[1].left_px - out[0].left_px, 1000.0);

    c.tick(Viewport::new(900.0, 800.0), 6, &mut out);
    assert_eq!(out[1].left_px - out[0].left_px, 440.0);
}

#[test]
fn jump_then_tick_lays_out_from_jumped_offset_plus_speed() {
    let viewport = Viewport::new(1200.0, 800.0);
    let mut c = ConveyorState::new(ConveyorConfig::default(), viewport);
    let speed = c.speed;
    c.jump(100.0, 200.0);
    let mut out = Vec::new();
    c.tick(viewport, 6, &mut out);

    assert_eq!(c.offset, 100.0 + speed);
    let expected = wrap_position(100.0 + speed, 440.0 * 6.0) - 440.0;
    assert_eq!(out[0].left_px, expected);
    assert_eq!(c.pointer_y, 200.0);
}

#[test]
fn paused_conveyor_still_lays_out() {
    let viewport = Viewport::new(1200.0, 800.0);
    let mut c = ConveyorState::new(ConveyorConfig::default(), viewport);
    c.set_hover(2, true);
    let before = c.offset;
    let mut out = Vec::new();
    assert!(c.tick(viewport, 6, &mut out));
    assert_eq!(c.offset, before);
    assert_eq!(out.len(), 6);

    c.set_pointer_y(0.0);
    c.tick(viewport, 6, &mut out);
    assert_eq!(out[0].top_percent, 45.0);
}

#[test]
fn hover_pause_holds_until_last_blob_is_left() {
    let mut c = ConveyorState::new(ConveyorConfig::default(), Viewport::new(1200.0, 800.0));
    assert!(!c.is_paused());

    c.set_hover(1, true);
    c.set_hover(2, true);
    c.set_hover(1, false);
    assert!(c.is_paused(), "blob 2 is still hovered");
    c.set_hover(2, false);
    assert!(!c.is_paused());

    // repeated enter on the same blob counts once
    c.set_hover(4, true);
    c.set_hover(4, true);
    c.set_hover(4, false);
    assert!(!c.is_paused());

    // stray leave without enter is harmless
    c.set_hover(5, false);
    assert!(!c.is_paused());
}

#[test]
fn parallax_tracks_pointer_height() {
    let h = 800.0;
    assert_eq!(parallax_percent(h / 2.0, h, 50.0, 10.0), 50.0);
    assert_eq!(parallax_percent(0.0, h, 50.0, 10.0), 45.0);
    assert_eq!(parallax_percent(h, h, 50.0, 10.0), 55.0);
}

#[test]
fn new_conveyor_starts_one_viewport_left_with_pointer_centered() {
    let c = ConveyorState::new(ConveyorConfig::default(), Viewport::new(1440.0, 900.0));
    assert_eq!(c.offset, -1440.0);
    assert_eq!(c.pointer_y, 450.0);
    assert_eq!(c.speed, CONVEYOR_SPEED);
}

#[test]
fn degenerate_inputs_skip_layout_but_keep_scrolling() {
    let mut c = ConveyorState::new(ConveyorConfig::default(), Viewport::new(1200.0, 800.0));
    let mut out = vec![Placement::default(); 3];
    let before = c.offset;

    assert!(!c.tick(Viewport::new(1200.0, 800.0), 0, &mut out));
    assert!(out.is_empty());
    assert!(!c.tick(Viewport::new(0.0, 800.0), 6, &mut out));
    assert!(!c.tick(Viewport::new(1200.0, -1.0), 6, &mut out));
    assert!(out.is_empty());
    assert!(c.offset > before);
}

#[test]
fn shuffle_lands_inside_the_viewport() {
    let viewport = Viewport::new(1200.0, 800.0);
    let mut c = ConveyorState::new(ConveyorConfig::default(), viewport);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        c.shuffle(viewport, &mut rng);
        assert!((0.0..viewport.width).contains(&c.offset));
        assert!((0.0..viewport.height).contains(&c.pointer_y));
    }
}
