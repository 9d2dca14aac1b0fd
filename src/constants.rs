// Page wiring constants for the browser front-end.

// Elements
pub const SCROLL_SURFACE_SELECTOR: &str = ".js-s";
pub const PROGRESS_BAR_SELECTOR: &str = ".p-bar";
pub const CODING_SELECTOR: &str = "#coding";
pub const CREATIVE_SELECTOR: &str = "#creative";

// Scroll feel
pub const PAGE_FRICTION: f64 = 0.9;
pub const CODING_TRAVEL_PX: f64 = 500.0; // horizontal parallax travel
pub const CREATIVE_TRAVEL_PX: f64 = 200.0;

// Drag-to-scroll: fraction of the cumulative drag applied each frame
pub const DRAG_SPEED: f64 = 0.1;

// Indicator
pub const INDICATOR_RADIUS_PX: f64 = 24.0;
pub const MAIN_COLOR_PROPERTY: &str = "--main-color";
pub const RING_LINE_WIDTH: f64 = 2.0;
