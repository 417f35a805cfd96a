//! JSON-file backed key-value store.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;
use crate::storage::STORAGE_FILE;
use crate::traits::KeyValueStore;

/// Key-value store persisted as one pretty-printed JSON object.
///
/// The whole document is cached in memory and rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, serde_json::Value>>,
}

impl FileStore {
    /// Open (or lazily create) `storage.json` inside `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::open_file(data_dir.as_ref().join(STORAGE_FILE))
    }

    /// Open a store backed by an explicit file path.
    ///
    /// A missing file starts empty; an unreadable one is an error rather than
    /// silently discarding the user's data.
    pub fn open_file(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cache = if path.exists() {
            let file = File::open(&path).map_err(|e| StorageError::io(&path, e))?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|e| StorageError::serde(path.display().to_string(), e))?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = cache.len(), "opened storage");
        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, serde_json::Value>> {
        self.cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn flush(&self, document: &BTreeMap<String, serde_json::Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
            }
        }

        let file = File::create(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, document)
            .map_err(|e| StorageError::serde(self.path.display().to_string(), e))?;
        writer.flush().map_err(|e| StorageError::io(&self.path, e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        let mut document = self.lock();
        let previous = document.insert(key.to_string(), value);
        if let Err(err) = self.flush(&document) {
            // keep memory in step with disk
            match previous {
                Some(old) => document.insert(key.to_string(), old),
                None => document.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut document = self.lock();
        if let Some(previous) = document.remove(key) {
            if let Err(err) = self.flush(&document) {
                document.insert(key.to_string(), previous);
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        {
            let store = FileStore::open(dir.path()).unwrap();
            store.set_json("isAuthenticated", &true).unwrap();
        }
        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get_json::<bool>("isAuthenticated").unwrap(), Some(true));
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::open(&nested).unwrap();
        store.set_json("k", &1).unwrap();
        assert!(nested.join(STORAGE_FILE).exists());
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set_json("email", &"a@b.c").unwrap();
        store.remove("email").unwrap();
        store.remove("email").unwrap();
        assert_eq!(store.get("email").unwrap(), None);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("email").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORAGE_FILE), "{not json").unwrap();
        let result = FileStore::open(dir.path());
        assert!(matches!(result, Err(StorageError::Serialization { .. })));
    }

    #[test]
    fn test_typed_value_mismatch() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        store.set_json("userProgress", &"oops").unwrap();
        let result = store.get_json::<u32>("userProgress");
        assert!(matches!(
            result,
            Err(StorageError::Serialization { ref key, .. }) if key == "userProgress"
        ));
    }
}
