#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{
    DragListener, Endpoint, PointerConfig, PointerIndicator, Rgb, ScrollConfig, ScrollEngine,
    TrackOptions, TransformUpdate,
};
use crate::dom::{Element, IndicatorCanvas};
use crate::events::scroll::PageScroller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

fn build_scroller(document: &web::Document) -> anyhow::Result<Rc<RefCell<PageScroller>>> {
    let surface = Element::query(document, SCROLL_SURFACE_SELECTOR)?;
    surface.style("will-change", "transform");

    let slot: frame::FrameSlot = Rc::new(RefCell::new(None));
    let scroller = Rc::new(RefCell::new(ScrollEngine::new(
        surface,
        ScrollConfig {
            friction: PAGE_FRICTION,
        },
        Box::new(frame::RafScheduler::new(slot.clone())),
    )));
    {
        let s = scroller.borrow();
        log::info!(
            "[scroll] viewport={:.0} max_y={:.0}",
            s.viewport_height(),
            s.max_y()
        );
    }
    frame::start_scroll_loop(scroller.clone(), slot);
    Ok(scroller)
}

fn tracked(document: &web::Document, selector: &str) -> anyhow::Result<Element> {
    let el = Element::query(document, selector)?;
    el.style("will-change", "transform");
    Ok(el)
}

fn wire_tracking(document: &web::Document, scroller: &Rc<RefCell<PageScroller>>) -> anyhow::Result<()> {
    let mut s = scroller.borrow_mut();
    let size = s.size_handle();
    let viewport = {
        let size = size.clone();
        Endpoint::lazy(move || size.get().viewport_height)
    };
    let max_y = Endpoint::lazy(move || size.get().max_y);

    s.track(
        tracked(document, PROGRESS_BAR_SELECTOR)?,
        Box::new(|el: &mut Element, value: f64, _: f64| {
            el.set_transform(TransformUpdate::y(-value));
        }),
        TrackOptions::parallax((viewport, 0.0)).over((0.0, max_y)),
    );
    for (selector, travel) in [
        (CODING_SELECTOR, CODING_TRAVEL_PX),
        (CREATIVE_SELECTOR, CREATIVE_TRAVEL_PX),
    ] {
        s.track(
            tracked(document, selector)?,
            Box::new(|el: &mut Element, value: f64, _: f64| {
                el.set_transform(TransformUpdate::x(value));
            }),
            TrackOptions::parallax([0.0, travel]),
        );
    }
    Ok(())
}

fn main_color(window: &web::Window) -> Rgb {
    let value = window
        .document()
        .and_then(|d| d.body())
        .and_then(|body| window.get_computed_style(&body).ok().flatten())
        .and_then(|style| style.get_property_value(MAIN_COLOR_PROPERTY).ok())
        .unwrap_or_default();
    Rgb::from_hex(&value).unwrap_or_else(|e| {
        log::warn!("[pointer] {e}; falling back to black");
        Rgb::default()
    })
}

fn build_pointer(
    window: &web::Window,
    document: &web::Document,
    scroller: &Rc<RefCell<PageScroller>>,
) -> anyhow::Result<()> {
    let pointer = Rc::new(RefCell::new(PointerIndicator::new(PointerConfig {
        radius: INDICATOR_RADIUS_PX,
        color: main_color(window),
    })));
    let canvas = Rc::new(RefCell::new(IndicatorCanvas::create(document)?));
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?
        .append_child(&canvas.borrow().canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let scroller_drag = scroller.clone();
    let drag: DragListener = Rc::new(move |delta: glam::DVec2| {
        scroller_drag.borrow_mut().set_scroll(-delta.y * DRAG_SPEED);
    });
    pointer.borrow_mut().on_drag(drag);

    events::pointer::wire_pointer_handlers(events::pointer::PointerWiring {
        pointer: pointer.clone(),
        canvas: canvas.clone(),
    });
    frame::start_pointer_loop(pointer, canvas);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glide starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let scroller = build_scroller(&document)?;
    wire_tracking(&document, &scroller)?;
    events::scroll::wire_scroll_handlers(&scroller);
    events::keyboard::wire_global_keydown(scroller.clone());

    build_pointer(&window, &document, &scroller)?;
    Ok(())
}
