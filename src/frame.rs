use crate::render;
use scroll_core::{CameraMotionController, FrameClock, LoopHandle, SceneConfig, TrackedObject};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub controller: Rc<RefCell<CameraMotionController>>,
    pub canvas: web::HtmlCanvasElement,
    pub material_color: Rc<Cell<[f32; 3]>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub clock: FrameClock,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let time = self.clock.tick();
        let (update, camera) = {
            let mut controller = self.controller.borrow_mut();
            let update = controller.frame(time.delta);
            (update, controller.camera())
        };

        if let Some(g) = &mut self.gpu {
            g.set_material_color(self.material_color.get());
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(&camera, &update) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    config: &SceneConfig,
    objects: &[TrackedObject],
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, config, objects).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.as_ref().unchecked_ref());
    }
}

/// Run `frame()` on every animation frame until the returned handle is cancelled.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle::default();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if handle_tick.is_cancelled() {
            // A closure must not be dropped while it runs; release it on the next microtask.
            let slot = tick_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                slot.borrow_mut().take();
            });
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(t) = tick_clone.borrow().as_ref() {
            request_frame(t);
        }
    }) as Box<dyn FnMut()>));
    if let Some(t) = tick.borrow().as_ref() {
        request_frame(t);
    }
    handle
}
