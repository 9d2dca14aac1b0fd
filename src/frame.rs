use crate::core::{ElementGeometry, FrameScheduler, PointerIndicator, ScrollEngine, ScrollSurface};
use crate::dom::IndicatorCanvas;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The callback a [`RafScheduler`] hands to `requestAnimationFrame`. Filled
/// in after the engine that owns the scheduler exists.
pub type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct RafScheduler {
    slot: FrameSlot,
}

impl RafScheduler {
    pub fn new(slot: FrameSlot) -> Self {
        Self { slot }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        let Some(w) = web::window() else { return };
        match self.slot.borrow().as_ref() {
            Some(tick) => {
                _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
            }
            None => log::warn!("[frame] frame requested before the loop was wired"),
        }
    }
}

/// Point `slot` at the engine's tick and start it. The engine schedules its
/// own frames from then on and stops when paused.
pub fn start_scroll_loop<S, T>(engine: Rc<RefCell<ScrollEngine<S, T>>>, slot: FrameSlot)
where
    S: ScrollSurface + 'static,
    T: ElementGeometry + 'static,
{
    let engine_tick = engine.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        engine_tick.borrow_mut().tick();
    }) as Box<dyn FnMut()>));
    engine.borrow_mut().start();
}

/// Continuous indicator loop: advance, clear, draw, every frame.
pub fn start_pointer_loop(
    pointer: Rc<RefCell<PointerIndicator>>,
    surface: Rc<RefCell<IndicatorCanvas>>,
) {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
        let (frame, color) = {
            let mut p = pointer.borrow_mut();
            (p.tick(), p.config().color)
        };
        let s = surface.borrow();
        s.ctx.clear_rect(0.0, 0.0, s.width, s.height);
        render::draw_indicator(&s.ctx, &frame, color);
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
