use crate::app::SharedApp;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &SharedApp) {
    wire_pointerdown(app);
    wire_pointermove(app);
    wire_pointerup(app);
}

fn wire_pointerdown(app: &SharedApp) {
    let app = app.clone();
    let canvas = app.borrow().canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut guard = app.borrow_mut();
        let a = &mut *guard;
        let viewport = dom::css_viewport(&a.canvas);
        let px = dom::pointer_canvas_px(&ev, &a.canvas);
        if a.interaction.pointer_down(&a.main, viewport, px).is_some() {
            _ = a.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(app: &SharedApp) {
    let app = app.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut guard = app.borrow_mut();
        let a = &mut *guard;
        let viewport = dom::css_viewport(&a.canvas);
        let px = dom::pointer_canvas_px(&ev, &a.canvas);
        a.interaction.pointer_move(&mut a.main, viewport, px);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(app: &SharedApp) {
    let app = app.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app.borrow_mut().interaction.pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
