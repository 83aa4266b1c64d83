use crate::app::SharedApp;
use crate::constants::{
    CONTACT_EMAIL_ID, CONTACT_FORM_ID, CONTACT_MESSAGE_ID, CONTACT_NAME_ID, MODAL_CLOSE_DELAY_MS,
    NOTIFICATION_DURATION_MS, NOTIFICATION_ID, NOTIFICATION_SHOW_CLASS,
};
use crate::{dom, modal};
use orbit_core::{ContactForm, KeyValueStore, StoreError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Browser local storage behind the core's key-value seam.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open() -> Result<Self, StoreError> {
        let window = web::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

struct FormFields {
    name: web::HtmlInputElement,
    email: web::HtmlInputElement,
    message: web::HtmlTextAreaElement,
}

impl FormFields {
    fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            name: dom::element(document, CONTACT_NAME_ID)?,
            email: dom::element(document, CONTACT_EMAIL_ID)?,
            message: dom::element(document, CONTACT_MESSAGE_ID)?,
        })
    }

    fn read(&self) -> ContactForm {
        ContactForm {
            name: self.name.value(),
            email: self.email.value(),
            message: self.message.value(),
        }
    }

    fn write(&self, form: &ContactForm) {
        self.name.set_value(&form.name);
        self.email.set_value(&form.email);
        self.message.set_value(&form.message);
    }
}

fn show_notification(document: &web::Document) {
    dom::set_class(document, NOTIFICATION_ID, NOTIFICATION_SHOW_CLASS, true);
    let doc = document.clone();
    dom::set_timeout(NOTIFICATION_DURATION_MS, move || {
        dom::set_class(&doc, NOTIFICATION_ID, NOTIFICATION_SHOW_CLASS, false);
    });
}

pub fn wire_contact_form(document: &web::Document, app: &SharedApp) -> anyhow::Result<()> {
    let form_el: web::HtmlFormElement = dom::element(document, CONTACT_FORM_ID)?;
    let fields = FormFields::lookup(document)?;
    let document = document.clone();
    let app = app.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let mut form = fields.read();
        let timestamp: String = js_sys::Date::new_0().to_iso_string().into();
        let result = LocalStore::open()
            .map_err(orbit_core::ContactError::from)
            .and_then(|mut store| orbit_core::submit(&mut store, &mut form, &timestamp));
        match result {
            Ok(_) => {
                fields.write(&form);
                show_notification(&document);
                let app = app.clone();
                dom::set_timeout(MODAL_CLOSE_DELAY_MS, move || modal::close(&app));
            }
            Err(e) => log::error!("[contact] submit failed: {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = form_el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
    Ok(())
}
