//! JSON file store (native)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// A flat JSON object on disk, cached in memory.
///
/// Every write goes to `<path>.tmp` first and is then renamed over `path`,
/// so a crash mid-write leaves the previous file intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, String> = if path.exists() {
            let json = fs::read_to_string(&path)?;
            serde_json::from_str(&json)?
        } else {
            BTreeMap::new()
        };
        log::debug!("Opened store {} ({} entries)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{load_depth, save_depth};

    fn scratch_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("depth-clicker-{}", std::process::id()));
        dir.join(format!("{name}.json"))
    }

    #[test]
    fn test_missing_file_is_empty() {
        let store = FileStore::open(scratch_path("missing")).unwrap();
        assert_eq!(store.get("depth").unwrap(), None);
    }

    #[test]
    fn test_persists_across_reopen() {
        let path = scratch_path("reopen");
        {
            let mut store = FileStore::open(&path).unwrap();
            save_depth(&mut store, 42).unwrap();
        }
        let store = FileStore::open(&path).unwrap();
        assert_eq!(load_depth(&store).unwrap(), Some(42));
        assert!(!path.with_extension("tmp").exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_garbage_file_is_json_error() {
        let path = scratch_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();
        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
        let _ = fs::remove_file(&path);
    }
}
