use crate::app::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_wheel(app: &SharedApp) {
    let app = app.clone();
    let canvas = app.borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        orbit_core::wheel(&mut app.borrow_mut().main.camera, ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
