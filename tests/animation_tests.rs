// Host-side tests for damped channels and channel registries.

mod support;

use glam::DVec2;
use support::core::animation::*;

#[test]
fn scalar_channel_approaches_target_monotonically() {
    let mut ch = Damped::with_target(0.0, 100.0, 0.2);
    let mut prev_gap = ch.remaining();
    for _ in 0..200 {
        ch.advance();
        let gap = ch.remaining();
        assert!(ch.current() <= 100.0, "overshot: {}", ch.current());
        if prev_gap > 1e-12 {
            assert!(gap < prev_gap, "gap grew from {prev_gap} to {gap}");
        }
        prev_gap = gap;
    }
    assert!(ch.remaining() < 1e-9);
}

#[test]
fn descending_channel_never_undershoots() {
    let mut ch = Damped::with_target(50.0, -50.0, 0.35);
    for _ in 0..100 {
        ch.advance();
        assert!(ch.current() >= -50.0);
    }
    assert!((ch.current() + 50.0).abs() < 1e-9);
}

#[test]
fn unit_ease_reaches_target_in_one_tick() {
    let mut ch = Damped::with_target(3.0, 9.0, 1.0);
    ch.advance();
    assert_eq!(ch.current(), 9.0);
}

#[test]
fn tiny_ease_barely_moves() {
    let mut ch = Damped::with_target(0.0, 1000.0, 0.001);
    ch.advance();
    assert!((ch.current() - 1.0).abs() < 1e-9);
}

#[test]
fn advance_never_touches_target() {
    let mut ch = Damped::with_target(DVec2::ZERO, DVec2::new(4.0, -2.0), 0.5);
    for _ in 0..5 {
        ch.advance();
    }
    assert_eq!(ch.target(), DVec2::new(4.0, -2.0));
    assert_eq!(ch.ease(), 0.5);
}

#[test]
fn vector_fields_share_the_channel_ease() {
    let mut ch = Damped::with_target(DVec2::ZERO, DVec2::new(100.0, -40.0), 0.25);
    ch.advance();
    assert_eq!(ch.current(), DVec2::new(25.0, -10.0));
}

#[test]
fn partial_target_update_keeps_other_fields() {
    let mut ch = Damped::new(DVec2::new(1.0, 2.0), 0.5);
    ch.patch_target(Vec2Patch {
        x: Some(10.0),
        y: None,
    });
    assert_eq!(ch.target(), DVec2::new(10.0, 2.0));

    let mut scalar = Damped::new(5.0, 0.5);
    scalar.patch_target(None);
    assert_eq!(scalar.target(), 5.0);
}

#[test]
fn reset_moves_current_only() {
    let mut ch = Damped::with_target(0.0, 10.0, 0.5);
    ch.reset(7.0);
    assert_eq!(ch.current(), 7.0);
    assert_eq!(ch.target(), 10.0);
}

struct Pair {
    a: Damped<f64>,
    b: Damped<DVec2>,
}

impl AnimationRegistry for Pair {
    fn for_each_channel(&mut self, f: &mut dyn FnMut(&'static str, &mut dyn Channel)) {
        f("a", &mut self.a);
        f("b", &mut self.b);
    }

    fn for_each_channel_ref(&self, f: &mut dyn FnMut(&'static str, &dyn Channel)) {
        f("a", &self.a);
        f("b", &self.b);
    }
}

#[test]
fn registry_visits_every_channel_once_per_advance() {
    let mut reg = Pair {
        a: Damped::with_target(0.0, 1.0, 0.5),
        b: Damped::with_target(DVec2::ZERO, DVec2::ONE, 0.5),
    };
    let mut names = Vec::new();
    reg.for_each_channel(&mut |name, _| names.push(name));
    assert_eq!(names, ["a", "b"]);

    reg.advance_all();
    assert_eq!(reg.a.current(), 0.5);
    assert_eq!(reg.b.current(), DVec2::splat(0.5));
}

#[test]
fn registry_settles() {
    let mut reg = Pair {
        a: Damped::with_target(0.0, 1.0, 0.5),
        b: Damped::new(DVec2::ONE, 0.5),
    };
    assert!(!reg.is_settled(1e-6));
    for _ in 0..40 {
        reg.advance_all();
    }
    assert!(reg.is_settled(1e-6));
}

#[test]
fn settled_check_reads_through_shared_borrow() {
    let reg = Pair {
        a: Damped::with_target(0.0, 1.0, 0.5),
        b: Damped::new(DVec2::ONE, 0.5),
    };
    let shared: &Pair = &reg;
    let mut names = Vec::new();
    shared.for_each_channel_ref(&mut |name, channel| {
        names.push((name, channel.remaining()));
    });
    assert_eq!(names, [("a", 1.0), ("b", 0.0)]);
    assert!(!shared.is_settled(1e-6));
    assert!(shared.is_settled(1.0));
}
