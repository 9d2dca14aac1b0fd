// Parallax tracking: maps the scroll offset onto a per-element output range
// and a normalized progress value.

use super::numeric::{clamp, map_range};
use std::fmt;
use std::rc::Rc;

/// Geometry the tracker needs from an element, in page coordinates.
pub trait ElementGeometry {
    fn top(&self) -> f64;
    fn bottom(&self) -> f64;
}

/// One end of a domain. Lazy endpoints are evaluated on every use, never
/// cached, since they usually read geometry that changes on resize.
#[derive(Clone)]
pub enum Endpoint {
    Fixed(f64),
    Lazy(Rc<dyn Fn() -> f64>),
}

impl Endpoint {
    pub fn lazy(producer: impl Fn() -> f64 + 'static) -> Self {
        Self::Lazy(Rc::new(producer))
    }

    #[inline]
    pub fn resolve(&self) -> f64 {
        match self {
            Self::Fixed(v) => *v,
            Self::Lazy(f) => f(),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Endpoint {
    fn from(v: f64) -> Self {
        Self::Fixed(v)
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "Fixed({v})"),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Domain {
    pub start: Endpoint,
    pub end: Endpoint,
}

impl Domain {
    pub fn new(start: impl Into<Endpoint>, end: impl Into<Endpoint>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    #[inline]
    pub fn resolve(&self) -> (f64, f64) {
        (self.start.resolve(), self.end.resolve())
    }
}

impl<A: Into<Endpoint>, B: Into<Endpoint>> From<(A, B)> for Domain {
    fn from((start, end): (A, B)) -> Self {
        Self::new(start, end)
    }
}

impl From<[f64; 2]> for Domain {
    fn from([start, end]: [f64; 2]) -> Self {
        Self::new(start, end)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TrackOptions {
    /// Output range of the parallax value.
    pub parallax: Domain,
    /// Scroll range the mapping runs over. Derived from the element's
    /// visible span when absent.
    pub scroll: Option<Domain>,
    pub clamp: bool,
}

impl TrackOptions {
    pub fn parallax(domain: impl Into<Domain>) -> Self {
        Self {
            parallax: domain.into(),
            ..Self::default()
        }
    }

    pub fn over(mut self, scroll: impl Into<Domain>) -> Self {
        self.scroll = Some(scroll.into());
        self
    }

    pub fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }
}

/// Output of one tracking evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    pub parallax: f64,
    pub normalized: f64,
}

/// Receives the element, the parallax value and the normalized progress.
pub type TrackCallback<T> = Box<dyn FnMut(&mut T, f64, f64)>;

pub struct TrackedElement<T> {
    element: T,
    callback: TrackCallback<T>,
    options: TrackOptions,
}

impl<T: ElementGeometry> TrackedElement<T> {
    pub fn new(element: T, callback: TrackCallback<T>, options: TrackOptions) -> Self {
        Self {
            element,
            callback,
            options,
        }
    }

    pub fn element_mut(&mut self) -> &mut T {
        &mut self.element
    }

    /// Scroll range over which the element is on screen, extended by the
    /// parallax travel so the motion completes as the element leaves.
    pub fn visible_span(&self, viewport_height: f64, parallax_travel: f64) -> (f64, f64) {
        let start = self.element.top() - viewport_height;
        (
            if start < 0.0 { 0.0 } else { start },
            self.element.bottom() + parallax_travel,
        )
    }

    pub fn sample(&self, scroll_y: f64, viewport_height: f64) -> Progress {
        let (p0, p1) = self.options.parallax.resolve();
        let (s0, s1) = match &self.options.scroll {
            Some(domain) => domain.resolve(),
            None => self.visible_span(viewport_height, p1 - p0),
        };

        let mut parallax = map_range(s0, s1, p0, p1, scroll_y);
        let mut normalized = map_range(s0, s1, 0.0, 1.0, scroll_y);
        if self.options.clamp {
            parallax = clamp(parallax, p0, p1);
            normalized = clamp(normalized, 0.0, 1.0);
        }
        Progress {
            parallax,
            normalized,
        }
    }

    /// Evaluate at `scroll_y` and hand the result to the callback.
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) {
        let Progress {
            parallax,
            normalized,
        } = self.sample(scroll_y, viewport_height);
        (self.callback)(&mut self.element, parallax, normalized);
    }
}
