// Host-side tests for parallax domain resolution and mapping.

mod support;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use support::approx;
use support::core::tracking::*;

struct Block {
    top: f64,
    bottom: f64,
}

impl ElementGeometry for Block {
    fn top(&self) -> f64 {
        self.top
    }
    fn bottom(&self) -> f64 {
        self.bottom
    }
}

fn entry(top: f64, bottom: f64, options: TrackOptions) -> TrackedElement<Block> {
    TrackedElement::new(Block { top, bottom }, Box::new(|_: &mut Block, _: f64, _: f64| {}), options)
}

#[test]
fn endpoints_resolve_literal_lazy_and_default() {
    assert_eq!(Endpoint::Fixed(4.5).resolve(), 4.5);
    assert_eq!(Endpoint::lazy(|| 7.0).resolve(), 7.0);
    assert_eq!(Endpoint::default().resolve(), 0.0);
    assert_eq!(Domain::default().resolve(), (0.0, 0.0));
}

#[test]
fn lazy_endpoints_are_evaluated_on_every_use() {
    let height = Rc::new(Cell::new(800.0));
    let h = height.clone();
    let domain = Domain::new(Endpoint::lazy(move || h.get()), 0.0);
    assert_eq!(domain.resolve(), (800.0, 0.0));
    height.set(640.0);
    assert_eq!(domain.resolve(), (640.0, 0.0));
}

#[test]
fn derived_scroll_domain_spans_visibility_plus_travel() {
    let e = entry(200.0, 400.0, TrackOptions::parallax([0.0, 500.0]));
    assert_eq!(e.visible_span(800.0, 500.0), (0.0, 900.0));
    let p = e.sample(0.0, 800.0);
    assert_eq!(p.parallax, 0.0);
    assert_eq!(p.normalized, 0.0);
}

#[test]
fn derived_scroll_domain_starts_when_element_enters_viewport() {
    let e = entry(2000.0, 2300.0, TrackOptions::parallax([0.0, 200.0]));
    // enters at 2000 - 800, finishes at 2300 + 200
    assert_eq!(e.visible_span(800.0, 200.0), (1200.0, 2500.0));
    let p = e.sample(1850.0, 800.0);
    assert!(approx(p.parallax, 100.0));
    assert!(approx(p.normalized, 0.5));
}

#[test]
fn negative_travel_shortens_the_derived_domain() {
    let e = entry(100.0, 300.0, TrackOptions::parallax([50.0, -50.0]));
    assert_eq!(e.visible_span(800.0, -100.0), (0.0, 200.0));
    let p = e.sample(100.0, 800.0);
    assert!(approx(p.parallax, 0.0));
    assert!(approx(p.normalized, 0.5));
}

#[test]
fn explicit_scroll_domain_overrides_geometry() {
    let e = entry(
        5000.0,
        6000.0,
        TrackOptions::parallax([800.0, 0.0]).over([0.0, 1000.0]),
    );
    let p = e.sample(250.0, 800.0);
    assert!(approx(p.parallax, 600.0));
    assert!(approx(p.normalized, 0.25));
}

#[test]
fn unclamped_values_run_past_the_domain() {
    let e = entry(200.0, 400.0, TrackOptions::parallax([0.0, 500.0]));
    let p = e.sample(1800.0, 800.0);
    assert!(approx(p.parallax, 1000.0));
    assert!(approx(p.normalized, 2.0));
}

#[test]
fn clamped_values_stay_in_range() {
    let e = entry(200.0, 400.0, TrackOptions::parallax([0.0, 500.0]).clamped());
    let past = e.sample(1800.0, 800.0);
    assert_eq!(past.parallax, 500.0);
    assert_eq!(past.normalized, 1.0);

    let before = e.sample(-300.0, 800.0);
    assert_eq!(before.parallax, 0.0);
    assert_eq!(before.normalized, 0.0);
}

#[test]
fn clamping_a_descending_parallax_domain_pins_to_its_end() {
    // clamp(v, 800, 0) applies the upper bound last.
    let e = entry(
        0.0,
        100.0,
        TrackOptions::parallax([800.0, 0.0]).over([0.0, 1000.0]).clamped(),
    );
    assert_eq!(e.sample(250.0, 800.0).parallax, 0.0);
    assert!(approx(e.sample(250.0, 800.0).normalized, 0.25));
}

#[test]
fn empty_scroll_domain_produces_non_finite_values() {
    let e = entry(0.0, 100.0, TrackOptions::parallax([0.0, 10.0]).over([300.0, 300.0]));
    let p = e.sample(100.0, 800.0);
    assert!(!p.parallax.is_finite());
    assert!(!p.normalized.is_finite());
}

#[test]
fn update_passes_element_and_values_to_callback() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut e = TrackedElement::new(
        Block {
            top: 200.0,
            bottom: 400.0,
        },
        Box::new(move |b: &mut Block, v: f64, p: f64| {
            b.top += 1.0;
            sink.borrow_mut().push((v, p));
        }),
        TrackOptions::parallax([0.0, 500.0]),
    );
    e.update(450.0, 800.0);
    assert_eq!(e.element_mut().top(), 201.0);
    let (v, p) = seen.borrow()[0];
    assert!(approx(v, 250.0));
    assert!(approx(p, 0.5));
}

#[test]
fn geometry_changes_are_picked_up_on_next_sample() {
    let mut e = entry(200.0, 400.0, TrackOptions::parallax([0.0, 500.0]));
    let before = e.sample(450.0, 800.0);
    e.element_mut().bottom = 1300.0;
    let after = e.sample(450.0, 800.0);
    assert!(after.normalized < before.normalized);
    assert!(approx(after.normalized, 0.25));
}
