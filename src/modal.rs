use crate::app::SharedApp;
use crate::constants::{
    CLOSE_MODAL_ID, MODAL_ACTIVE_CLASS, MODAL_BACKDROP_ID, MODAL_CANVAS_CONTAINER_ID, MODAL_ID,
    OPEN_MODAL_ID,
};
use crate::{dom, frame};
use instant::Instant;
use web_sys as web;

pub fn wire_modal_buttons(document: &web::Document, app: &SharedApp) {
    let app_open = app.clone();
    dom::add_click_listener(document, OPEN_MODAL_ID, move || open(&app_open));
    let app_close = app.clone();
    dom::add_click_listener(document, CLOSE_MODAL_ID, move || close(&app_close));
    let app_backdrop = app.clone();
    dom::add_click_listener(document, MODAL_BACKDROP_ID, move || close(&app_backdrop));
}

/// Show the modal and start its scene. Re-opening an open modal is a no-op.
pub fn open(app: &SharedApp) {
    let Some(document) = dom::window_document() else {
        return;
    };
    {
        let mut a = app.borrow_mut();
        if a.modal.is_active() {
            return;
        }
        dom::set_class(&document, MODAL_ID, MODAL_ACTIVE_CLASS, true);
        // the container holds exactly the modal canvas, however often we open
        match document.get_element_by_id(MODAL_CANVAS_CONTAINER_ID) {
            Some(container) => {
                _ = container.replace_children_with_node_1(&a.modal_canvas);
            }
            None => log::warn!("[modal] missing #{}", MODAL_CANVAS_CONTAINER_ID),
        }
        dom::sync_canvas_backing_size(&a.modal_canvas);
        let viewport = dom::css_viewport(&a.modal_canvas);
        a.modal.open(viewport);
        a.modal_opened_at = Instant::now();
    }
    frame::ensure_modal_gpu(app);
    frame::start_modal_loop(app);
}

pub fn close(app: &SharedApp) {
    app.borrow_mut().modal.close();
    if let Some(document) = dom::window_document() {
        dom::set_class(&document, MODAL_ID, MODAL_ACTIVE_CLASS, false);
    }
}
