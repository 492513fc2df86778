//! Key-value persistence behind the client stores.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session and theme flags, and the password-reset hand-off, all persist
//! through [`KeyValueStore`]. In the browser this is `localStorage` or
//! `sessionStorage`; during SSR and in tests it is an in-memory map.
//!
//! Flags are stored as `{"state":{"<field>":<bool>},"version":0}` so values
//! written by earlier dashboard builds are read back unchanged.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value, json};

/// String key-value storage. Writes are best-effort: a full or disabled
/// browser store drops the write rather than failing the caller.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn clear(&self);
}

/// Shared handle to a store.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// In-memory store for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn shared() -> SharedStore {
        Arc::new(Self::default())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

/// Which browser storage area to use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArea {
    /// Survives reloads and restarts.
    Local,
    /// Lives as long as the tab.
    Session,
}

/// `window.localStorage` / `window.sessionStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug)]
pub struct BrowserStore {
    area: StorageArea,
}

impl BrowserStore {
    pub fn new(area: StorageArea) -> Self {
        Self { area }
    }

    pub fn shared(area: StorageArea) -> SharedStore {
        Arc::new(Self::new(area))
    }

    #[cfg(feature = "hydrate")]
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        let storage = match self.area {
            StorageArea::Local => window.local_storage(),
            StorageArea::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.area, key);
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("storage write for {key} was refused");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = self.storage() {
                let _ = storage.clear();
            }
        }
    }
}

/// A boolean persisted under `key` as `{"state":{field:bool}}`.
///
/// Reads happen once in [`PersistedFlag::load`]; every write goes straight to
/// the store, so a reload sees the last value written.
#[derive(Clone)]
pub struct PersistedFlag {
    key: &'static str,
    field: &'static str,
    value: bool,
    store: SharedStore,
}

impl PersistedFlag {
    pub fn load(store: SharedStore, key: &'static str, field: &'static str) -> Self {
        let value = store.get(key).and_then(|raw| decode_flag(&raw, field)).unwrap_or(false);
        Self { key, field, value, store }
    }

    pub fn get(&self) -> bool {
        self.value
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
        self.store.set(self.key, &encode_flag(self.field, value));
    }

    pub fn toggle(&mut self) -> bool {
        self.set(!self.value);
        self.value
    }

    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl std::fmt::Debug for PersistedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistedFlag").field("key", &self.key).field("value", &self.value).finish_non_exhaustive()
    }
}

impl PartialEq for PersistedFlag {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.field == other.field && self.value == other.value
    }
}

pub fn encode_flag(field: &str, value: bool) -> String {
    let mut state = Map::new();
    state.insert(field.to_owned(), Value::Bool(value));
    json!({ "state": state, "version": 0 }).to_string()
}

/// Read a flag from either the envelope format or a bare JSON boolean.
pub fn decode_flag(raw: &str, field: &str) -> Option<bool> {
    let value: Value = serde_json::from_str(raw).ok()?;
    match value {
        Value::Bool(flag) => Some(flag),
        Value::Object(_) => value.get("state")?.get(field)?.as_bool(),
        _ => None,
    }
}
