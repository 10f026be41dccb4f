use crate::audio::MediaTrack;
use crate::constants::SPARKLE_CLASS;
use crate::core::{ConveyorState, SPARKLE_LIFETIME_MS};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub document: web::Document,
    pub conveyor: Rc<RefCell<ConveyorState>>,
    pub blobs: Vec<web::HtmlElement>,
    pub chime: Rc<RefCell<MediaTrack>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_parallax(&w);
    wire_sparkle_trail(&w);
    wire_blob_hover(&w);
}

fn wire_parallax(w: &PointerWiring) {
    let conveyor = w.conveyor.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        conveyor.borrow_mut().set_pointer_y(ev.client_y() as f64);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_sparkle_trail(w: &PointerWiring) {
    let document = w.document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        spawn_sparkle(&document, ev.client_x(), ev.client_y());
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn spawn_sparkle(document: &web::Document, x: i32, y: i32) {
    let (Some(body), Ok(el)) = (document.body(), document.create_element("div")) else {
        return;
    };
    let Ok(el) = el.dyn_into::<web::HtmlElement>() else {
        return;
    };
    el.set_class_name(SPARKLE_CLASS);
    dom::set_style(&el, "left", &format!("{}px", x));
    dom::set_style(&el, "top", &format!("{}px", y));
    if body.append_child(&el).is_err() {
        return;
    }
    let Some(wnd) = web::window() else {
        return;
    };
    let remove = Closure::once_into_js(move || el.remove());
    _ = wnd.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        SPARKLE_LIFETIME_MS,
    );
}

fn wire_blob_hover(w: &PointerWiring) {
    for (i, blob) in w.blobs.iter().enumerate() {
        let conveyor = w.conveyor.clone();
        let chime = w.chime.clone();
        let enter = Closure::wrap(Box::new(move || {
            conveyor.borrow_mut().set_hover(i, true);
            chime.borrow_mut().retrigger();
        }) as Box<dyn FnMut()>);
        _ = blob.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let conveyor = w.conveyor.clone();
        let leave = Closure::wrap(Box::new(move || {
            conveyor.borrow_mut().set_hover(i, false);
        }) as Box<dyn FnMut()>);
        _ = blob.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
}
