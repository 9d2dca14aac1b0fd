// Host-side tests for the scalar helpers.

mod support;

use support::core::numeric::*;

#[test]
fn lerp_hits_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
}

#[test]
fn lerp_extrapolates_outside_unit_range() {
    assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
    assert_eq!(lerp(0.0, 10.0, -0.5), -5.0);
}

#[test]
fn clamp_keeps_values_inside_the_range() {
    for v in [0.0, 0.25, 3.0, 10.0] {
        assert_eq!(clamp(v, 0.0, 10.0), v);
    }
}

#[test]
fn clamp_pins_values_outside_the_range() {
    assert_eq!(clamp(-4.0, 0.0, 10.0), 0.0);
    assert_eq!(clamp(42.0, 0.0, 10.0), 10.0);
}

#[test]
fn clamp_with_inverted_range_applies_upper_bound_last() {
    // min(max(lo, v), hi) with lo > hi always lands on hi.
    assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    assert_eq!(clamp(-5.0, 10.0, 0.0), 0.0);
    assert_eq!(clamp(50.0, 10.0, 0.0), 0.0);
}

#[test]
fn clamp_lets_nan_through() {
    assert!(clamp(f64::NAN, 0.0, 1.0).is_nan());
}

#[test]
fn map_range_maps_endpoints_and_interior() {
    assert_eq!(map_range(0.0, 900.0, 0.0, 500.0, 0.0), 0.0);
    assert_eq!(map_range(0.0, 900.0, 0.0, 500.0, 900.0), 500.0);
    assert_eq!(map_range(100.0, 200.0, 0.0, 1.0, 150.0), 0.5);
    // reversed output range
    assert_eq!(map_range(0.0, 10.0, 800.0, 0.0, 5.0), 400.0);
}

#[test]
fn map_range_round_trips() {
    let (a0, a1, b0, b1) = (-30.0, 470.0, 12.5, -7.25);
    for t in [-100.0, 0.0, 3.3, 250.0, 470.0, 1e4] {
        let there = map_range(a0, a1, b0, b1, t);
        let back = map_range(b0, b1, a0, a1, there);
        assert!((back - t).abs() < 1e-9, "t={t} back={back}");
    }
}

#[test]
fn map_range_over_empty_domain_is_not_finite() {
    assert!(!map_range(5.0, 5.0, 0.0, 1.0, 7.0).is_finite());
    assert!(map_range(5.0, 5.0, 0.0, 1.0, 5.0).is_nan());
}
