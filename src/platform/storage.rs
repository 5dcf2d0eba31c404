//! LocalStorage persistence (wasm32)

use crate::persistence::{KeyValueStore, MemoryStore, StoreError};

/// Prefix applied to every LocalStorage key
const KEY_PREFIX: &str = "depth_clicker_";

/// Browser LocalStorage
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn new() -> Result<Self, StoreError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)?;
        Ok(Self { storage })
    }

    fn key(key: &str) -> String {
        format!("{KEY_PREFIX}{key}")
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(&Self::key(key))
            .map_err(|_| StoreError::Unavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(&Self::key(key), value)
            .map_err(|_| StoreError::Unavailable)
    }
}

/// LocalStorage when the browser allows it, memory otherwise (private mode)
pub enum WebStore {
    Local(LocalStorageStore),
    Memory(MemoryStore),
}

impl WebStore {
    pub fn detect() -> Self {
        match LocalStorageStore::new() {
            Ok(store) => WebStore::Local(store),
            Err(e) => {
                log::warn!("LocalStorage {}, progress will not be saved", e);
                WebStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for WebStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            WebStore::Local(s) => s.get(key),
            WebStore::Memory(s) => s.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            WebStore::Local(s) => s.set(key, value),
            WebStore::Memory(s) => s.set(key, value),
        }
    }
}
