// Host-side tests for the starfield and floating decorations.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}
mod lanes {
    include!("../src/core/lanes.rs");
}

use constants::*;
use glam::Mat4;
use lanes::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield::*;

#[test]
fn stars_fill_a_spherical_shell() {
    let mut rng = StdRng::seed_from_u64(1);
    let stars = generate_star_positions(STAR_COUNT, &mut rng);
    assert_eq!(stars.len(), STAR_COUNT);
    let max_r = STAR_RADIUS_MIN + STAR_RADIUS_SPAN;
    for s in &stars {
        let r = s.length();
        assert!(r >= STAR_RADIUS_MIN - 0.01 && r <= max_r + 0.01, "radius {r}");
    }
    // directions cover both hemispheres on every axis
    assert!(stars.iter().any(|s| s.x < 0.0) && stars.iter().any(|s| s.x > 0.0));
    assert!(stars.iter().any(|s| s.y < 0.0) && stars.iter().any(|s| s.y > 0.0));
    assert!(stars.iter().any(|s| s.z < 0.0) && stars.iter().any(|s| s.z > 0.0));
}

#[test]
fn boost_scales_rotation_rate() {
    let mut calm = StarfieldMotion::default();
    let mut party = StarfieldMotion {
        boost: 2.5,
        ..StarfieldMotion::default()
    };
    for _ in 0..100 {
        calm.advance();
        party.advance();
    }
    assert!((calm.rotation_y - 100.0 * STAR_SPIN_Y).abs() < 1e-5);
    assert!((calm.rotation_x - 100.0 * STAR_SPIN_X).abs() < 1e-5);
    assert!((party.rotation_y - 2.5 * calm.rotation_y).abs() < 1e-5);
}

#[test]
fn resting_starfield_has_identity_model() {
    let m = StarfieldMotion::default().model_matrix();
    assert!(m.abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn shuffled_lanes_are_a_permutation() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let mut out = shuffle_lanes(&FLOATIE_LANES, &mut rng);
        assert_eq!(out.len(), FLOATIE_LANES.len());
        out.sort_unstable();
        let mut expected = FLOATIE_LANES.to_vec();
        expected.sort_unstable();
        assert_eq!(out, expected);
    }
}

#[test]
fn lane_shuffle_eventually_moves_something() {
    let mut rng = StdRng::seed_from_u64(3);
    let moved = (0..10).any(|_| shuffle_lanes(&KANDI_LANES, &mut rng) != KANDI_LANES.to_vec());
    assert!(moved);
}
