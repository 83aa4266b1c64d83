//! Contact form capture into a local key-value store.

use crate::error::{ContactError, StoreError};
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// Key under which the contact list is persisted.
pub const CONTACT_STORAGE_KEY: &str = "contactMessages";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

/// Minimal string key-value store (browser local storage on the web).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store for host builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Current values of the three form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Read the persisted list. Absent → empty. Unparseable content is logged and
/// treated as empty so the next write replaces it.
pub fn load_records(store: &impl KeyValueStore) -> Result<Vec<ContactRecord>, StoreError> {
    let Some(raw) = store.get(CONTACT_STORAGE_KEY)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str::<Vec<ContactRecord>>(&raw) {
        Ok(list) => Ok(list),
        Err(e) => {
            log::warn!("[contact] discarding malformed stored list: {}", e);
            Ok(Vec::new())
        }
    }
}

/// Append the form contents plus `timestamp` to the persisted list and clear
/// the form. No validation is performed.
pub fn submit(
    store: &mut impl KeyValueStore,
    form: &mut ContactForm,
    timestamp: &str,
) -> Result<ContactRecord, ContactError> {
    let record = ContactRecord {
        name: form.name.clone(),
        email: form.email.clone(),
        message: form.message.clone(),
        timestamp: timestamp.to_string(),
    };
    let mut list = load_records(store)?;
    list.push(record.clone());
    let json = serde_json::to_string(&list)?;
    store.set(CONTACT_STORAGE_KEY, &json)?;
    form.clear();
    log::info!("[contact] stored submission #{}", list.len());
    Ok(record)
}
