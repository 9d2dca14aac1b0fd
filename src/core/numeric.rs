// Scalar helpers shared by the animation, scroll and pointer modules.

/// Linear interpolation between `a` and `b`. `t` is not bounded.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Clamp `v` into `[lo, hi]` as `min(max(lo, v), hi)`.
///
/// The lower bound is applied first, so an inverted range (`lo > hi`)
/// always yields `hi`. A NaN `v` stays NaN.
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    let raised = if v < lo { lo } else { v };
    if raised > hi {
        hi
    } else {
        raised
    }
}

/// Map `t` linearly from `[a0, a1]` onto `[b0, b1]`.
///
/// `a0 == a1` divides by zero; the NaN/infinite result is left to propagate.
#[inline]
pub fn map_range(a0: f64, a1: f64, b0: f64, b1: f64, t: f64) -> f64 {
    (t - a0) * (b1 - b0) / (a1 - a0) + b0
}
