use crate::app::SharedApp;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Nudge/reset keys act on the current selection only.
pub fn wire_keydown(app: &SharedApp) {
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let key = ev.key();
        let mut guard = app.borrow_mut();
        let a = &mut *guard;
        if a.interaction.key_down(&mut a.main, &key) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
