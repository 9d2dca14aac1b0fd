// Default tuning for the scroll engine and the pointer indicator.

// Scroll
pub const DEFAULT_FRICTION: f64 = 0.5; // damping factor is 1 - friction

// Pointer indicator channel ease factors (fraction of the gap closed per frame)
pub const POSITION_EASE: f64 = 0.15;
pub const OPACITY_EASE: f64 = 0.2;
pub const RADIUS_EASE: f64 = 0.1;
pub const INDICATOR_EASE: f64 = 0.1;
pub const PRESS_EASE: f64 = 0.2;

// Pointer indicator geometry
pub const DEFAULT_RADIUS: f64 = 24.0;
pub const RADIUS_FLOOR_SCALE: f64 = 0.7; // ring shrinks to 70% while pressed
pub const GUTTER_NEAR: f64 = 8.0; // glyph gap from the ring when shown
pub const GUTTER_FAR: f64 = 24.0; // glyph gap from the ring when hidden
pub const GLYPH_SIZE: f64 = 3.0; // circumradius of each triangle glyph
pub const GLYPH_FLIP_DEG: f64 = 180.0;
