use crate::core::PointerIndicator;
use crate::dom::IndicatorCanvas;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub pointer: Rc<RefCell<PointerIndicator>>,
    pub canvas: Rc<RefCell<IndicatorCanvas>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_enter_leave(&w);
    wire_mousemove(&w);
    wire_mousedown_up(&w);
    wire_canvas_resize(&w);
}

fn add_window_listener(event: &str, handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::MouseEvent)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_enter_leave(w: &PointerWiring) {
    let pointer = w.pointer.clone();
    add_window_listener("mouseover", move |_: web::MouseEvent| {
        pointer.borrow_mut().pointer_enter();
    });
    let pointer = w.pointer.clone();
    add_window_listener("mouseout", move |_: web::MouseEvent| {
        pointer.borrow_mut().pointer_leave();
    });
}

fn wire_mousemove(w: &PointerWiring) {
    let pointer = w.pointer.clone();
    add_window_listener("mousemove", move |ev: web::MouseEvent| {
        pointer
            .borrow_mut()
            .pointer_move(ev.page_x() as f64, ev.page_y() as f64);
    });
}

fn wire_mousedown_up(w: &PointerWiring) {
    let pointer = w.pointer.clone();
    add_window_listener("mousedown", move |_: web::MouseEvent| {
        pointer.borrow_mut().pointer_down();
    });
    let pointer = w.pointer.clone();
    add_window_listener("mouseup", move |_: web::MouseEvent| {
        let mut p = pointer.borrow_mut();
        if p.is_pressed() {
            p.pointer_up();
        }
    });
}

fn wire_canvas_resize(w: &PointerWiring) {
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        canvas.borrow_mut().sync_backing_size();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
