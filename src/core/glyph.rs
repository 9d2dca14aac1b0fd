// Pure geometry for the pointer indicator: triangle glyphs and the ring arc.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};

/// A filled equilateral triangle pointing up before rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub center: DVec2,
    /// Circumradius in CSS pixels.
    pub size: f64,
    pub opacity: f64,
    /// Degrees, clockwise in screen space.
    pub rotation: f64,
}

impl Glyph {
    pub fn vertices(&self) -> [DVec2; 3] {
        let DVec2 { x, y } = self.center;
        let half_side = self.size * 30f64.to_radians().cos();
        let drop = self.size * 30f64.to_radians().sin();
        rotate_about(
            self.center,
            [
                DVec2::new(x, y - self.size),
                DVec2::new(x + half_side, y + drop),
                DVec2::new(x - half_side, y + drop),
            ],
            self.rotation,
        )
    }
}

pub fn rotate_about<const N: usize>(origin: DVec2, points: [DVec2; N], degrees: f64) -> [DVec2; N] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    points.map(|p| {
        let d = p - origin;
        DVec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + origin
    })
}

/// Start and end angles (radians) of a ring drawn from 12 o'clock covering
/// `fraction` of a full turn.
#[inline]
pub fn arc_angles(fraction: f64) -> (f64, f64) {
    (-FRAC_PI_2, fraction * TAU - FRAC_PI_2)
}
