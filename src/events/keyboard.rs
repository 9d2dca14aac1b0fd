use super::scroll::PageScroller;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, scroller: &Rc<RefCell<PageScroller>>) {
    match ev.key().as_str() {
        " " => {
            let mut s = scroller.borrow_mut();
            if s.is_paused() {
                s.start();
            } else {
                s.pause();
            }
            log::info!("[keys] scroll {}", if s.is_paused() { "paused" } else { "running" });
            ev.prevent_default();
        }
        "Home" => {
            scroller.borrow_mut().scroll_to(0.0);
            ev.prevent_default();
        }
        "End" => {
            let mut s = scroller.borrow_mut();
            let max_y = s.max_y();
            s.scroll_to(max_y);
            ev.prevent_default();
        }
        _ => {}
    }
}

pub fn wire_global_keydown(scroller: Rc<RefCell<PageScroller>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &scroller);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
