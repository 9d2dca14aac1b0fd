use crate::core::ScrollEngine;
use crate::dom::Element;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageScroller = ScrollEngine<Element, Element>;

pub fn wire_scroll_handlers(scroller: &Rc<RefCell<PageScroller>>) {
    wire_wheel(scroller);
    wire_resize(scroller);
}

fn wire_wheel(scroller: &Rc<RefCell<PageScroller>>) {
    let scroller = scroller.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        scroller.borrow_mut().on_wheel(ev.delta_y());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Refresh cached element geometry, then the scroll bounds. Scroll and
/// channel state are untouched.
fn wire_resize(scroller: &Rc<RefCell<PageScroller>>) {
    let scroller = scroller.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut s = scroller.borrow_mut();
        s.surface_mut().refresh_bounds();
        for el in s.tracked_elements_mut() {
            el.refresh_bounds();
        }
        s.recompute_bounds();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
