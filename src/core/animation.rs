// Damped channels: a `current`/`target` pair advanced once per frame by
// linear interpolation with a fixed ease factor.
//
// A channel never suspends. `advance` is the only thing that moves
// `current` (besides an explicit `Damped::reset`); targets are written by
// whoever owns the channel.

use super::numeric::lerp;
use glam::DVec2;

/// A value that can be eased field-by-field toward a target.
pub trait Animatable: Copy {
    /// Partial update: fields left as `None` keep their previous value.
    type Patch;

    /// Interpolate every field toward `to` with the same weight.
    fn lerp_to(self, to: Self, t: f64) -> Self;

    /// Largest per-field absolute difference.
    fn distance(self, other: Self) -> f64;

    fn merge(self, patch: Self::Patch) -> Self;
}

impl Animatable for f64 {
    type Patch = Option<f64>;

    #[inline]
    fn lerp_to(self, to: Self, t: f64) -> Self {
        lerp(self, to, t)
    }

    #[inline]
    fn distance(self, other: Self) -> f64 {
        (self - other).abs()
    }

    #[inline]
    fn merge(self, patch: Option<f64>) -> Self {
        patch.unwrap_or(self)
    }
}

/// Partial update for a 2D position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2Patch {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl Animatable for DVec2 {
    type Patch = Vec2Patch;

    #[inline]
    fn lerp_to(self, to: Self, t: f64) -> Self {
        DVec2::new(lerp(self.x, to.x, t), lerp(self.y, to.y, t))
    }

    #[inline]
    fn distance(self, other: Self) -> f64 {
        (self - other).abs().max_element()
    }

    #[inline]
    fn merge(self, patch: Vec2Patch) -> Self {
        DVec2::new(patch.x.unwrap_or(self.x), patch.y.unwrap_or(self.y))
    }
}

/// A single eased value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Damped<V> {
    current: V,
    target: V,
    ease: f64,
}

impl<V: Animatable> Damped<V> {
    /// Channel at rest on `initial`.
    pub fn new(initial: V, ease: f64) -> Self {
        Self::with_target(initial, initial, ease)
    }

    pub fn with_target(current: V, target: V, ease: f64) -> Self {
        Self {
            current,
            target,
            ease,
        }
    }

    #[inline]
    pub fn current(&self) -> V {
        self.current
    }

    #[inline]
    pub fn target(&self) -> V {
        self.target
    }

    #[inline]
    pub fn ease(&self) -> f64 {
        self.ease
    }

    pub fn set_target(&mut self, target: V) {
        self.target = target;
    }

    /// Overwrite only the fields present in `patch`.
    pub fn patch_target(&mut self, patch: V::Patch) {
        self.target = self.target.merge(patch);
    }

    /// Jump `current` (and nothing else) to `value`.
    pub fn reset(&mut self, value: V) {
        self.current = value;
    }

    /// `current = lerp(current, target, ease)` for every field.
    #[inline]
    pub fn advance(&mut self) {
        self.current = self.current.lerp_to(self.target, self.ease);
    }

    pub fn remaining(&self) -> f64 {
        self.current.distance(self.target)
    }
}

/// Object-safe view of a channel, regardless of its value shape.
pub trait Channel {
    fn advance(&mut self);
    fn remaining(&self) -> f64;
}

impl<V: Animatable> Channel for Damped<V> {
    fn advance(&mut self) {
        Damped::advance(self);
    }

    fn remaining(&self) -> f64 {
        Damped::remaining(self)
    }
}

/// A fixed set of named channels advanced together once per frame.
///
/// Channel names are for inspection only; nothing keys on them.
pub trait AnimationRegistry {
    /// Visit every channel exactly once.
    fn for_each_channel(&mut self, f: &mut dyn FnMut(&'static str, &mut dyn Channel));

    /// Read-only visit, same order as `for_each_channel`.
    fn for_each_channel_ref(&self, f: &mut dyn FnMut(&'static str, &dyn Channel));

    fn advance_all(&mut self) {
        self.for_each_channel(&mut |_, channel| channel.advance());
    }

    /// True when every channel is within `epsilon` of its target.
    fn is_settled(&self, epsilon: f64) -> bool {
        let mut settled = true;
        self.for_each_channel_ref(&mut |_, channel| settled &= channel.remaining() <= epsilon);
        settled
    }
}
