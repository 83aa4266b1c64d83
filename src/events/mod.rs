use crate::app::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod keyboard;
mod pointer;
mod wheel;

pub use keyboard::wire_keydown;
pub use pointer::wire_pointer_handlers;
pub use wheel::wire_wheel;

/// Keep canvas backing sizes and camera aspects in step with the window.
pub fn wire_resize(app: &SharedApp) {
    app.borrow_mut().resize();
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        app.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
