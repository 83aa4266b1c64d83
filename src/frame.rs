use crate::app::SharedApp;
use crate::callback_slot::CallbackSlot;
use crate::constants::{MAIN_CLEAR, MODAL_CLEAR};
use crate::render;
use orbit_core::LoopControl;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

type TickCell = RefCell<Option<Closure<dyn FnMut()>>>;
pub type Tick = CallbackSlot<Closure<dyn FnMut()>>;

fn request_frame(cell: &TickCell) {
    if let (Some(w), Some(cb)) = (web::window(), cell.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, clear: [f64; 3]) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, clear).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Main scene loop; runs for as long as the app state is alive.
pub fn start_loop(app: SharedApp) {
    let weak_app = Rc::downgrade(&app);
    let tick = Tick::new(move |slot| {
        Closure::wrap(Box::new(move || {
            let Some(app) = weak_app.upgrade() else { return };
            app.borrow_mut().main_frame();
            if let Some(cell) = slot.upgrade() {
                request_frame(&cell);
            }
        }) as Box<dyn FnMut()>)
    });
    request_frame(tick.cell());
    app.borrow_mut().main_tick = Some(tick);
}

fn modal_tick(app: &SharedApp) -> Tick {
    let weak_app = Rc::downgrade(app);
    Tick::new(move |slot| {
        Closure::wrap(Box::new(move || {
            let Some(app) = weak_app.upgrade() else { return };
            let ctl = app.borrow_mut().modal_frame();
            match ctl {
                LoopControl::Continue => {
                    if let Some(cell) = slot.upgrade() {
                        request_frame(&cell);
                    }
                }
                LoopControl::Stop => {
                    app.borrow_mut().modal_loop_running = false;
                    log::info!("[modal] loop stopped");
                }
            }
        }) as Box<dyn FnMut()>)
    })
}

/// Modal loop; reschedules only while the modal step reports `Continue`.
/// A second call while a loop is already scheduled does nothing. Every
/// opening reuses the same tick closure.
pub fn start_modal_loop(app: &SharedApp) {
    let mut a = app.borrow_mut();
    if a.modal_loop_running {
        return;
    }
    a.modal_loop_running = true;
    let tick = a.modal_tick.get_or_insert_with(|| modal_tick(app));
    request_frame(tick.cell());
}

/// Create the modal's GPU context the first time the modal is shown.
pub fn ensure_modal_gpu(app: &SharedApp) {
    let canvas = {
        let mut a = app.borrow_mut();
        if a.modal_gpu.is_some() || a.modal_gpu_pending {
            return;
        }
        a.modal_gpu_pending = true;
        a.modal_canvas.clone()
    };
    let app = app.clone();
    spawn_local(async move {
        let gpu = init_gpu(&canvas, MODAL_CLEAR).await;
        let mut a = app.borrow_mut();
        a.modal_gpu = gpu;
        a.modal_gpu_pending = false;
    });
}

pub async fn init_main_gpu(app: &SharedApp) {
    let canvas = app.borrow().canvas.clone();
    let gpu = init_gpu(&canvas, MAIN_CLEAR).await;
    app.borrow_mut().gpu = gpu;
}
