use crate::dom;
use scroll_core::{parse_color, CameraMotionController, LoopHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub controller: Rc<RefCell<CameraMotionController>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_resize(&w);
    wire_scroll(&w);
    wire_pointermove(&w);
}

fn add_window_listener<E: 'static + wasm_bindgen::convert::FromWasmAbi>(
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("resize", move |_ev: web::Event| {
        if let Some(wnd) = web::window() {
            let vp = dom::window_viewport(&wnd);
            w.controller.borrow_mut().on_resize(vp.width(), vp.height());
            log::debug!("[resize] {}x{}", vp.width(), vp.height());
        }
    });
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("scroll", move |_ev: web::Event| {
        let Some(wnd) = web::window() else {
            return;
        };
        let scroll_y = wnd.scroll_y().unwrap_or(0.0) as f32;
        if let Some(change) = w.controller.borrow_mut().on_scroll(scroll_y) {
            log::info!("[scroll] entered section {}", change.index);
        }
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    add_window_listener("pointermove", move |ev: web::PointerEvent| {
        w.controller
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}

/// Live material color from an optional `<input type="color" id="material-color">`.
pub fn wire_material_color_input(document: &web::Document, material_color: Rc<Cell<[f32; 3]>>) {
    let Some(input) = dom::input_by_id(document, dom::MATERIAL_COLOR_INPUT_ID) else {
        return;
    };
    let input_for_listener = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let value = input.value();
        match parse_color(&value) {
            Some(rgb) => material_color.set(rgb),
            None => log::warn!("[color] ignoring {:?}", value),
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = input_for_listener
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Stop the loop on teardown; a page parked in the back/forward cache keeps it.
pub fn wire_pagehide(handle: LoopHandle) {
    add_window_listener("pagehide", move |ev: web::PageTransitionEvent| {
        if handle.on_page_hide(ev.persisted()) {
            log::info!("[frame] page torn down; loop stopped");
        }
    });
}
