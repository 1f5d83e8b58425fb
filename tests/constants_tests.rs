// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Geometry defaults should be positive pixel distances
    assert!(DEFAULT_RADIUS > 0.0);
    assert!(DEFAULT_MAX_DISPLACEMENT > 0.0);

    // Lerp fraction must live in (0, 1]
    assert!(DEFAULT_LERP_FACTOR > 0.0 && DEFAULT_LERP_FACTOR <= 1.0);
    assert!(MIN_LERP_FACTOR > 0.0 && MIN_LERP_FACTOR <= DEFAULT_LERP_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn zero_distance_epsilon_is_negligible_at_pixel_scale() {
    assert!(ZERO_DISTANCE_EPS > 0.0);
    assert!(ZERO_DISTANCE_EPS < 1e-3);
    // the epsilon must never carve a visible hole out of the radius
    assert!(ZERO_DISTANCE_EPS < DEFAULT_RADIUS * 1e-6);
}
