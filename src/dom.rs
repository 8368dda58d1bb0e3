use scroll_core::constants::MAX_PIXEL_RATIO;
use scroll_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const MATERIAL_COLOR_INPUT_ID: &str = "material-color";

#[inline]
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    Viewport::new(w as f32, h as f32)
}

#[inline]
pub fn pixel_ratio(window: &web::Window) -> f64 {
    window.device_pixel_ratio().min(MAX_PIXEL_RATIO)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = pixel_ratio(&w);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn input_by_id(document: &web::Document, element_id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}
