#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod callback_slot;
mod constants;
mod dom;
mod events;
mod form;
mod frame;
mod modal;
mod render;
mod texture;

use app::AppState;
use constants::{EARTH_TEXTURE_ATTR, MODAL_SEED, SCENE_CANVAS_ID};
use orbit_core::SceneParams;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element(&document, SCENE_CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    let modal_canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create modal canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut params = SceneParams::default();
    if let Some(url) = canvas.get_attribute(EARTH_TEXTURE_ATTR) {
        params.earth_texture_url = url;
    }
    let texture_url = params.earth_texture_url.clone();

    let app = Rc::new(RefCell::new(AppState::new(
        params,
        canvas,
        modal_canvas,
        MODAL_SEED,
    )));

    events::wire_resize(&app);
    events::wire_pointer_handlers(&app);
    events::wire_keydown(&app);
    events::wire_wheel(&app);
    modal::wire_modal_buttons(&document, &app);
    if let Err(e) = form::wire_contact_form(&document, &app) {
        log::warn!("[contact] form not wired: {:#}", e);
    }

    frame::init_main_gpu(&app).await;
    texture::prepare_ui_plate(&app);
    texture::load_earth_texture(&app, texture_url);
    frame::start_loop(app);
    Ok(())
}
