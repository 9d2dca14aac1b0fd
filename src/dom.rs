use crate::core::{ElementGeometry, ScrollSurface, Transform, TransformUpdate};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (px(w.inner_width()), px(w.inner_height()))
}

#[derive(Clone, Copy, Debug, Default)]
struct Bounds {
    top: f64,
    bottom: f64,
    height: f64,
}

/// A page element with cached geometry and the transform last applied to it.
///
/// Bounds are measured once and then only on [`Element::refresh_bounds`],
/// which the resize handler calls.
pub struct Element {
    el: web::HtmlElement,
    bounds: Bounds,
    transform: Transform,
}

impl Element {
    pub fn new(el: web::HtmlElement) -> Self {
        let mut element = Self {
            el,
            bounds: Bounds::default(),
            transform: Transform::default(),
        };
        element.refresh_bounds();
        element
    }

    pub fn query(document: &web::Document, selector: &str) -> anyhow::Result<Self> {
        let el = document
            .query_selector(selector)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("missing {selector}"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{selector} is not an HtmlElement: {:?}", e))?;
        Ok(Self::new(el))
    }

    pub fn refresh_bounds(&mut self) {
        let rect = self.el.get_bounding_client_rect();
        self.bounds = Bounds {
            top: rect.top(),
            bottom: rect.bottom(),
            height: rect.height(),
        };
    }

    pub fn style(&self, property: &str, value: &str) -> &Self {
        if let Err(e) = self.el.style().set_property(property, value) {
            log::warn!("[dom] set {property} failed: {:?}", e);
        }
        self
    }

    pub fn set_transform(&mut self, update: TransformUpdate) -> &mut Self {
        self.transform.set(update);
        self.apply_transform();
        self
    }

    fn apply_transform(&self) {
        self.style("transform", &self.transform.to_css());
    }
}

impl ElementGeometry for Element {
    fn top(&self) -> f64 {
        self.bounds.top
    }

    fn bottom(&self) -> f64 {
        self.bounds.bottom
    }
}

impl ScrollSurface for Element {
    fn content_height(&self) -> f64 {
        self.bounds.height
    }

    fn viewport_height(&self) -> f64 {
        viewport_size().1
    }

    fn translate_y(&mut self, y: f64) {
        self.set_transform(TransformUpdate::y(y));
    }
}

/// Full-viewport overlay canvas for the pointer indicator.
pub struct IndicatorCanvas {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

impl IndicatorCanvas {
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let style = canvas.style();
        for (property, value) in [("position", "fixed"), ("top", "0"), ("left", "0")] {
            style
                .set_property(property, value)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut surface = Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
        };
        surface.sync_backing_size();
        Ok(surface)
    }

    /// Match the backing store to the viewport times `devicePixelRatio` and
    /// keep drawing in CSS pixels.
    pub fn sync_backing_size(&mut self) {
        let Some(w) = web::window() else { return };
        let dpr = w.device_pixel_ratio();
        let (width, height) = viewport_size();
        self.width = width;
        self.height = height;
        self.canvas.set_width((width * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{width}px"));
        _ = style.set_property("height", &format!("{height}px"));
        _ = self.ctx.scale(dpr, dpr);
    }
}
