// Inertial page scrolling.
//
// The engine owns one damped offset. Input moves the target; every frame
// eases the current offset toward it, translates the scroll surface by the
// negated offset and re-evaluates every tracked element in registration
// order.

use super::animation::Damped;
use super::constants::DEFAULT_FRICTION;
use super::numeric::clamp;
use super::tracking::{ElementGeometry, TrackCallback, TrackOptions, TrackedElement};
use std::cell::Cell;
use std::rc::Rc;

/// The element that is moved to fake scrolling, plus the viewport it sits in.
pub trait ScrollSurface {
    fn content_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
    /// Apply a vertical translation in pixels.
    fn translate_y(&mut self, y: f64);
}

/// Requests one future call to [`ScrollEngine::tick`].
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollConfig {
    /// In `[0, 1)`. Higher is more sluggish.
    pub friction: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current_y: f64,
    pub target_y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizeState {
    pub max_y: f64,
    pub viewport_height: f64,
}

pub struct ScrollEngine<S, T> {
    surface: S,
    offset: Damped<f64>,
    size: Rc<Cell<SizeState>>,
    tracked: Vec<TrackedElement<T>>,
    scheduler: Box<dyn FrameScheduler>,
    paused: bool,
    frame_pending: bool,
}

impl<S: ScrollSurface, T: ElementGeometry> ScrollEngine<S, T> {
    /// Build a paused engine at offset 0 with bounds measured from `surface`.
    /// Call [`ScrollEngine::start`] to begin the frame loop.
    pub fn new(surface: S, config: ScrollConfig, scheduler: Box<dyn FrameScheduler>) -> Self {
        let mut engine = Self {
            surface,
            offset: Damped::new(0.0, 1.0 - config.friction),
            size: Rc::new(Cell::new(SizeState::default())),
            tracked: Vec::new(),
            scheduler,
            paused: true,
            frame_pending: false,
        };
        engine.recompute_bounds();
        engine
    }

    /// Jump request. The target is not clamped.
    pub fn scroll_to(&mut self, y: f64) {
        self.offset.set_target(y);
    }

    /// Relative motion, clamped to `[0, max_y]`.
    pub fn set_scroll(&mut self, delta_y: f64) {
        let max_y = self.max_y();
        self.offset
            .set_target(clamp(self.offset.target() + delta_y, 0.0, max_y));
    }

    /// Wheel input is ignored while paused.
    pub fn on_wheel(&mut self, delta_y: f64) {
        if !self.paused {
            self.set_scroll(delta_y);
        }
    }

    /// Re-measure after any viewport or content size change. Channel state is
    /// left alone.
    pub fn recompute_bounds(&mut self) {
        let viewport_height = self.surface.viewport_height();
        let content_height = self.surface.content_height();
        let max_y = if content_height > viewport_height {
            (content_height - viewport_height).ceil()
        } else {
            0.0
        };
        self.size.set(SizeState {
            max_y,
            viewport_height,
        });
        log::debug!("[scroll] bounds viewport={viewport_height:.1} max_y={max_y:.1}");
    }

    /// One frame: ease the offset, move the surface, update tracked elements.
    pub fn tick(&mut self) {
        self.frame_pending = false;
        if !self.paused {
            self.schedule();
        }

        self.offset.advance();
        let y = self.offset.current();
        self.surface.translate_y(-y);

        let viewport_height = self.viewport_height();
        for entry in &mut self.tracked {
            entry.update(y, viewport_height);
        }
    }

    /// Stop scheduling frames. A frame already requested still runs.
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::debug!("[scroll] paused at y={:.1}", self.offset.current());
        }
    }

    pub fn start(&mut self) {
        if self.paused {
            self.paused = false;
            log::debug!("[scroll] started");
            if !self.frame_pending {
                self.schedule();
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Register an element and position it immediately at the current
    /// offset so it does not jump on the next frame.
    pub fn track(&mut self, element: T, callback: TrackCallback<T>, options: TrackOptions) {
        let mut entry = TrackedElement::new(element, callback, options);
        entry.update(self.offset.current(), self.viewport_height());
        self.tracked.push(entry);
        log::debug!("[scroll] tracking {} element(s)", self.tracked.len());
    }

    pub fn max_y(&self) -> f64 {
        self.size.get().max_y
    }

    pub fn viewport_height(&self) -> f64 {
        self.size.get().viewport_height
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            current_y: self.offset.current(),
            target_y: self.offset.target(),
        }
    }

    pub fn size_state(&self) -> SizeState {
        self.size.get()
    }

    /// Shared view of the bounds, readable from lazy domain endpoints without
    /// borrowing the engine.
    pub fn size_handle(&self) -> Rc<Cell<SizeState>> {
        Rc::clone(&self.size)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn tracked_elements_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.tracked.iter_mut().map(TrackedElement::element_mut)
    }

    fn schedule(&mut self) {
        self.frame_pending = true;
        self.scheduler.request_frame();
    }
}
