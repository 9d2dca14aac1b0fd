// Custom pointer indicator.
//
// Pointer events only move channel targets; `PointerIndicator::tick`
// eases every channel, notifies drag listeners while pressed and derives the
// numbers the canvas step draws. Behaviourally the indicator is idle
// (opacity target 0), hovering (opacity, radius and glyph targets 1) or
// pressed (radius and enabled glyph targets 0).

use super::animation::{Animatable, AnimationRegistry, Channel, Damped, Vec2Patch};
use super::color::Rgb;
use super::constants::*;
use super::glyph::Glyph;
use super::numeric::lerp;
use glam::DVec2;
use smallvec::SmallVec;
use std::rc::Rc;

/// Hidden-ness of the two glyphs above and below the ring: 1 is hidden and
/// pushed out to the far gutter, 0 is fully shown at the near gutter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicators {
    pub up: f64,
    pub down: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IndicatorsPatch {
    pub up: Option<f64>,
    pub down: Option<f64>,
}

impl Animatable for Indicators {
    type Patch = IndicatorsPatch;

    fn lerp_to(self, to: Self, t: f64) -> Self {
        Self {
            up: lerp(self.up, to.up, t),
            down: lerp(self.down, to.down, t),
        }
    }

    fn distance(self, other: Self) -> f64 {
        (self.up - other.up).abs().max((self.down - other.down).abs())
    }

    fn merge(self, patch: IndicatorsPatch) -> Self {
        Self {
            up: patch.up.unwrap_or(self.up),
            down: patch.down.unwrap_or(self.down),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerChannels {
    pub position: Damped<DVec2>,
    pub opacity: Damped<f64>,
    pub radius: Damped<f64>,
    pub indicator: Damped<Indicators>,
    /// Sweep of the ring. Not driven by any transition yet.
    pub press: Damped<f64>,
}

impl Default for PointerChannels {
    fn default() -> Self {
        let shown = Indicators { up: 1.0, down: 1.0 };
        Self {
            position: Damped::new(DVec2::ZERO, POSITION_EASE),
            opacity: Damped::new(0.0, OPACITY_EASE),
            radius: Damped::new(1.0, RADIUS_EASE),
            indicator: Damped::new(shown, INDICATOR_EASE),
            press: Damped::with_target(0.0, 1.0, PRESS_EASE),
        }
    }
}

impl AnimationRegistry for PointerChannels {
    fn for_each_channel(&mut self, f: &mut dyn FnMut(&'static str, &mut dyn Channel)) {
        f("position", &mut self.position);
        f("opacity", &mut self.opacity);
        f("radius", &mut self.radius);
        f("indicator", &mut self.indicator);
        f("press", &mut self.press);
    }

    fn for_each_channel_ref(&self, f: &mut dyn FnMut(&'static str, &dyn Channel)) {
        f("position", &self.position);
        f("opacity", &self.opacity);
        f("radius", &self.radius);
        f("indicator", &self.indicator);
        f("press", &self.press);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerConfig {
    /// Ring radius in CSS pixels when not pressed.
    pub radius: f64,
    pub color: Rgb,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            color: Rgb::default(),
        }
    }
}

/// Receives the displacement since the press, once per frame while pressed.
pub type DragListener = Rc<dyn Fn(DVec2)>;

/// Which glyphs dim on press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Enabled {
    up: bool,
    down: bool,
}

/// Everything the drawing step needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorFrame {
    /// Global alpha for the whole indicator.
    pub alpha: f64,
    pub center: DVec2,
    pub radius: f64,
    /// Fraction of the ring to stroke.
    pub sweep: f64,
    pub up: Glyph,
    pub down: Glyph,
}

pub struct PointerIndicator {
    config: PointerConfig,
    channels: PointerChannels,
    pressed: bool,
    last_pos: DVec2,
    enabled: Enabled,
    drag_listeners: SmallVec<[DragListener; 2]>,
}

impl PointerIndicator {
    pub fn new(config: PointerConfig) -> Self {
        Self {
            config,
            channels: PointerChannels::default(),
            pressed: false,
            last_pos: DVec2::ZERO,
            enabled: Enabled {
                up: true,
                down: true,
            },
            drag_listeners: SmallVec::new(),
        }
    }

    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    pub fn channels(&self) -> &PointerChannels {
        &self.channels
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn pointer_enter(&mut self) {
        self.channels.opacity.set_target(1.0);
    }

    pub fn pointer_leave(&mut self) {
        self.channels.opacity.set_target(0.0);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.channels.position.patch_target(Vec2Patch {
            x: Some(x),
            y: Some(y),
        });
    }

    /// Snapshot the drag baseline and collapse the ring and enabled glyphs.
    pub fn pointer_down(&mut self) {
        self.pressed = true;
        self.last_pos = self.channels.position.target();
        self.set_press_targets(0.0);
        log::debug!(
            "[pointer] press at ({:.1}, {:.1})",
            self.last_pos.x,
            self.last_pos.y
        );
    }

    pub fn pointer_up(&mut self) {
        self.pressed = false;
        self.set_press_targets(1.0);
        log::debug!("[pointer] release");
    }

    /// `mode > 0` dims only the up glyph on press, `mode < 0` only the down
    /// glyph, and `0` dims both and syncs them with the ring's target.
    pub fn direction(&mut self, mode: f64) {
        let indicator = &mut self.channels.indicator;
        if mode > 0.0 {
            self.enabled = Enabled {
                up: true,
                down: false,
            };
            indicator.patch_target(IndicatorsPatch {
                down: Some(1.0),
                ..Default::default()
            });
        } else if mode < 0.0 {
            self.enabled = Enabled {
                up: false,
                down: true,
            };
            indicator.patch_target(IndicatorsPatch {
                up: Some(1.0),
                ..Default::default()
            });
        } else {
            self.enabled = Enabled {
                up: true,
                down: true,
            };
            let r = self.channels.radius.target();
            indicator.set_target(Indicators { up: r, down: r });
        }
    }

    pub fn on_drag(&mut self, listener: DragListener) {
        self.drag_listeners.push(listener);
    }

    /// Remove by identity. Unknown listeners are ignored.
    pub fn remove_drag(&mut self, listener: &DragListener) -> Option<DragListener> {
        let index = self
            .drag_listeners
            .iter()
            .position(|l| Rc::ptr_eq(l, listener))?;
        Some(self.drag_listeners.remove(index))
    }

    pub fn drag_listener_count(&self) -> usize {
        self.drag_listeners.len()
    }

    /// Displacement of the pointer target since the press. The baseline is
    /// not moved while pressed, so this is cumulative, not per-frame.
    pub fn drag_delta(&self) -> Option<DVec2> {
        self.pressed
            .then(|| self.channels.position.target() - self.last_pos)
    }

    /// Advance every channel, then notify drag listeners in registration
    /// order, then derive the frame.
    pub fn tick(&mut self) -> IndicatorFrame {
        self.channels.advance_all();
        if let Some(delta) = self.drag_delta() {
            for listener in &self.drag_listeners {
                listener(delta);
            }
        }
        self.frame()
    }

    /// Render parameters from the current channel values.
    pub fn frame(&self) -> IndicatorFrame {
        let c = &self.channels;
        let center = c.position.current();
        let radius = self.config.radius * lerp(RADIUS_FLOOR_SCALE, 1.0, c.radius.current());
        let indicator = c.indicator.current();
        let glyph = |hidden: f64, sign: f64, rotation: f64| Glyph {
            center: DVec2::new(
                center.x,
                center.y + sign * (radius + lerp(GUTTER_NEAR, GUTTER_FAR, hidden)),
            ),
            size: GLYPH_SIZE,
            opacity: lerp(1.0, 0.0, hidden),
            rotation,
        };
        IndicatorFrame {
            alpha: c.opacity.current(),
            center,
            radius,
            sweep: c.press.current(),
            up: glyph(indicator.up, -1.0, 0.0),
            down: glyph(indicator.down, 1.0, GLYPH_FLIP_DEG),
        }
    }

    fn set_press_targets(&mut self, value: f64) {
        self.channels.radius.set_target(value);
        self.channels.indicator.patch_target(IndicatorsPatch {
            up: self.enabled.up.then_some(value),
            down: self.enabled.down.then_some(value),
        });
    }
}
