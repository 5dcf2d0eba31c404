//! Key-value persistence
//!
//! The game persists exactly one integer: the depth.
//! Storage is injected through `KeyValueStore` so the core never touches a
//! platform API directly.
//!
//! Backends:
//! - `MemoryStore`: in-process map (tests, ephemeral sessions)
//! - `FileStore`: JSON map on disk, written via temp file + rename (native)
//! - `platform::storage::LocalStorageStore`: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::consts::DEPTH_KEY;

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("corrupt value for '{key}': {value:?}")]
    Corrupt { key: String, value: String },
    #[error("storage unavailable")]
    Unavailable,
}

/// String key-value cell store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read the persisted depth (`None` if never saved)
pub fn load_depth<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<u64>, StoreError> {
    match store.get(DEPTH_KEY)? {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(depth) => Ok(Some(depth)),
            Err(_) => Err(StoreError::Corrupt {
                key: DEPTH_KEY.to_string(),
                value: raw,
            }),
        },
        None => Ok(None),
    }
}

/// Write the depth
pub fn save_depth<S: KeyValueStore + ?Sized>(store: &mut S, depth: u64) -> Result<(), StoreError> {
    store.set(DEPTH_KEY, &depth.to_string())
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(load_depth(&store).unwrap(), None);
        save_depth(&mut store, 351).unwrap();
        assert_eq!(load_depth(&store).unwrap(), Some(351));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_corrupt_depth() {
        let mut store = MemoryStore::new();
        store.set(DEPTH_KEY, "-4").unwrap();
        let err = load_depth(&store).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(err.to_string().contains("depth"));
    }
}
