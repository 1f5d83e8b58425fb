// Host-side tests for the per-frame integration step.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod field {
    include!("../src/core/field.rs");
}

use field::*;
use glam::Vec2;

fn field_with_target(target: Vec2, lerp_factor: f32) -> MagnetField {
    let mut f = MagnetField::new(MagnetConfig {
        lerp_factor,
        ..MagnetConfig::default()
    });
    f.register(Vec2::ZERO);
    f.units[0].target = target;
    f
}

#[test]
fn each_tick_scales_remaining_distance_by_one_minus_lerp() {
    for lerp in [0.05, 0.1, 0.5, 1.0] {
        let target = Vec2::new(10.0, -4.0);
        let mut field = field_with_target(target, lerp);
        for _ in 0..20 {
            let before = (target - field.units[0].current).length();
            field.integrate();
            let after = (target - field.units[0].current).length();
            let expected = before * (1.0 - lerp);
            assert!(
                (after - expected).abs() <= 1e-4 * before.max(1.0),
                "lerp {lerp}: expected {expected}, got {after}"
            );
        }
    }
}

#[test]
fn distance_to_target_strictly_decreases() {
    let target = Vec2::new(150.0, 80.0);
    let mut field = field_with_target(target, 0.1);
    let mut prev = target.length();
    for _ in 0..50 {
        field.integrate();
        let dist = (target - field.units[0].current).length();
        assert!(dist < prev);
        prev = dist;
    }
}

#[test]
fn converges_to_target_within_tolerance() {
    // 0.9^150 ~ 1.4e-7, well inside 1e-3 even for a 300px target
    let target = Vec2::new(300.0, 0.0);
    let mut field = field_with_target(target, 0.1);
    for _ in 0..150 {
        field.integrate();
    }
    assert!((target - field.units[0].current).length() < 1e-3);
}

#[test]
fn lerp_of_one_lands_on_target_in_a_single_tick() {
    let target = Vec2::new(-40.0, 25.0);
    let mut field = field_with_target(target, 1.0);
    field.integrate();
    assert_eq!(field.units[0].current, target);
}

#[test]
fn pointer_on_rest_then_integration_stays_finite() {
    // "hi there" scenario: pointer exactly on a unit's rest position
    let mut field = MagnetField::new(MagnetConfig::default());
    let rest = Vec2::new(12.0, 30.0);
    field.register(rest);
    field.apply_influence(rest);
    for _ in 0..150 {
        field.integrate();
    }
    let current = field.units[0].current;
    assert!(current.x.is_finite() && current.y.is_finite());
    assert!((current - field.units[0].target).length() < 1e-3);
}

#[test]
fn zero_target_relaxes_back_to_rest_offset() {
    let mut field = field_with_target(Vec2::new(100.0, 100.0), 0.1);
    for _ in 0..30 {
        field.integrate();
    }
    assert!(field.units[0].current.length() > 0.0);

    // influence gone: target back to zero, offset decays toward it
    field.units[0].target = Vec2::ZERO;
    for _ in 0..200 {
        field.integrate();
    }
    assert!(field.units[0].current.length() < 1e-3);
}

#[test]
fn empty_registry_integrates_without_error() {
    let mut field = MagnetField::new(MagnetConfig::default());
    field.integrate();
    assert!(field.is_empty());
}

#[test]
fn registry_may_grow_between_ticks() {
    let mut field = field_with_target(Vec2::new(10.0, 0.0), 0.5);
    field.integrate();
    let first_after_one = field.units[0].current;

    field.register(Vec2::new(50.0, 50.0));
    field.integrate();
    assert_eq!(field.len(), 2);
    assert!(field.units[0].current.x > first_after_one.x);
    assert_eq!(field.units[1].current, Vec2::ZERO);
}
