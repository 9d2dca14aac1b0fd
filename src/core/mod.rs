pub mod animation;
pub mod color;
pub mod constants;
pub mod glyph;
pub mod numeric;
pub mod pointer;
pub mod scroll;
pub mod tracking;
pub mod transform;

pub use animation::{Animatable, AnimationRegistry, Channel, Damped, Vec2Patch};
pub use color::{ColorError, Rgb};
pub use glyph::Glyph;
pub use numeric::{clamp, lerp, map_range};
pub use pointer::{DragListener, IndicatorFrame, Indicators, PointerConfig, PointerIndicator};
pub use scroll::{FrameScheduler, ScrollConfig, ScrollEngine, ScrollState, ScrollSurface, SizeState};
pub use tracking::{Domain, ElementGeometry, Endpoint, Progress, TrackCallback, TrackOptions};
pub use transform::{Transform, TransformUpdate};
