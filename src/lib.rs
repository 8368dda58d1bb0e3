#![cfg(target_arch = "wasm32")]
use scroll_core::{CameraMotionController, FrameClock, SceneConfig, Viewport};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    static LOOP: RefCell<Option<scroll_core::LoopHandle>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Read configuration from the page URL. Errors fall back to defaults once
/// logging is up, so they are returned rather than logged here.
fn load_config(window: &web::Window) -> (SceneConfig, Option<anyhow::Error>) {
    let pairs = match query_pairs(window) {
        Ok(pairs) => pairs,
        Err(e) => {
            let err = anyhow::anyhow!("unreadable query string: {:?}", e);
            return (SceneConfig::default(), Some(err));
        }
    };
    match SceneConfig::from_pairs(pairs) {
        Ok(cfg) => (cfg, None),
        Err(e) => (SceneConfig::default(), Some(e.into())),
    }
}

/// Decoded `(key, value)` pairs of `location.search`, in document order.
fn query_pairs(window: &web::Window) -> Result<Vec<(String, String)>, JsValue> {
    let search = window.location().search()?;
    let params = web::UrlSearchParams::new_with_str(&search)?;
    let Some(entries) = js_sys::try_iter(params.as_ref())? else {
        return Ok(Vec::new());
    };
    let mut pairs = Vec::new();
    for entry in entries {
        let entry: js_sys::Array = entry?.unchecked_into();
        if let (Some(key), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            pairs.push((key, value));
        }
    }
    Ok(pairs)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let (config, config_err) = load_config(&window);
    console_log::init_with_level(config.log_level).ok();
    log::info!("scroll-scene starting");
    if let Some(e) = config_err {
        log::warn!("[config] {}; using defaults", e);
    }

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Cancel the animation loop. The page stays as last rendered.
#[wasm_bindgen]
pub fn stop() {
    LOOP.with(|l| {
        if let Some(handle) = l.borrow_mut().take() {
            handle.cancel();
            log::info!("[frame] loop stopped");
        }
    });
}

async fn init(config: SceneConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .query_selector(dom::CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", dom::CANVAS_SELECTOR))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * min(devicePixelRatio, 2)
    wire_canvas_resize(&canvas);

    let viewport = dom::window_viewport(&window);
    let controller = Rc::new(RefCell::new(CameraMotionController::new(&config, viewport)));
    // Elapsed time is measured from controller creation.
    let clock = FrameClock::new();
    // The page may be restored mid-scroll; sync before the first frame.
    if let Some(change) = controller.borrow_mut().on_scroll(window.scroll_y().unwrap_or(0.0) as f32)
    {
        log::info!("[scroll] restored at section {}", change.index);
    }
    log_viewport(&viewport);

    let material_color = Rc::new(Cell::new(config.material_color));

    events::wire_input_handlers(events::InputWiring {
        controller: controller.clone(),
    });
    events::wire_material_color_input(&document, material_color.clone());

    // Snapshot so no borrow is held across the await.
    let objects = controller.borrow().objects().to_vec();
    let gpu = frame::init_gpu(&canvas, &config, &objects).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        canvas,
        material_color,
        gpu,
        clock,
    }));
    let handle = frame::start_loop(frame_ctx);
    events::wire_pagehide(handle.clone());
    LOOP.with(|l| *l.borrow_mut() = Some(handle));

    Ok(())
}

fn log_viewport(viewport: &Viewport) {
    log::info!(
        "[scene] viewport={}x{} aspect={:.3}",
        viewport.width(),
        viewport.height(),
        viewport.aspect()
    );
}
