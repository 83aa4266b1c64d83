use crate::dom;
use crate::frame::Tick;
use crate::render::GpuState;
use instant::Instant;
use orbit_core::{InteractionState, LoopControl, MainScene, ModalScene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the frame loops and input closures share.
pub struct AppState {
    pub params: SceneParams,
    pub main: MainScene,
    pub interaction: InteractionState,
    pub modal: ModalScene,

    pub canvas: web::HtmlCanvasElement,
    pub modal_canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState>,
    pub modal_gpu: Option<GpuState>,
    /// Set while a modal GPU context is being created.
    pub modal_gpu_pending: bool,
    pub modal_loop_running: bool,
    /// rAF callbacks, created once and reused; they hold the app weakly.
    pub main_tick: Option<Tick>,
    pub modal_tick: Option<Tick>,

    pub started: Instant,
    pub modal_opened_at: Instant,
}

pub type SharedApp = Rc<RefCell<AppState>>;

impl AppState {
    pub fn new(
        params: SceneParams,
        canvas: web::HtmlCanvasElement,
        modal_canvas: web::HtmlCanvasElement,
        modal_seed: u64,
    ) -> Self {
        let main = MainScene::build(&params, dom::css_viewport(&canvas));
        Self {
            params,
            main,
            interaction: InteractionState::default(),
            modal: ModalScene::new(modal_seed),
            canvas,
            modal_canvas,
            gpu: None,
            modal_gpu: None,
            modal_gpu_pending: false,
            modal_loop_running: false,
            main_tick: None,
            modal_tick: None,
            started: Instant::now(),
            modal_opened_at: Instant::now(),
        }
    }

    pub fn main_frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        self.main.step(elapsed, self.interaction.auto_rotate);
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            render_or_recover(g, &self.main.graph, &self.main.camera);
        }
    }

    pub fn modal_frame(&mut self) -> LoopControl {
        let elapsed = self.modal_opened_at.elapsed().as_secs_f32();
        let ctl = self.modal.step(elapsed);
        if ctl == LoopControl::Continue {
            if let Some(g) = &mut self.modal_gpu {
                g.resize_if_needed(self.modal_canvas.width(), self.modal_canvas.height());
                render_or_recover(g, &self.modal.graph, &self.modal.camera);
            }
        }
        ctl
    }

    /// Re-sync both canvases to their CSS size and update camera aspects.
    pub fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        self.main.camera.resize(dom::css_viewport(&self.canvas));
        if self.modal.is_active() {
            dom::sync_canvas_backing_size(&self.modal_canvas);
            self.modal
                .camera
                .resize(dom::css_viewport(&self.modal_canvas));
        }
    }
}

fn render_or_recover(g: &mut GpuState, graph: &orbit_core::SceneGraph, camera: &orbit_core::Camera) {
    match g.render(graph, camera) {
        Ok(()) => {}
        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
        Err(e) => log::error!("render error: {:?}", e),
    }
}
