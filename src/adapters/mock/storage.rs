//! In-memory key-value store for testing.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::error::StorageError;
use crate::traits::KeyValueStore;

/// Key-value store held entirely in memory.
///
/// Clones share the same backing map, so a test can keep a handle to
/// inspect what a store under test wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    values: Arc<Mutex<BTreeMap<String, serde_json::Value>>>,
    /// Whether writes should fail
    write_should_fail: Arc<Mutex<bool>>,
    /// Keys whose writes fail even when writes are otherwise allowed
    rejected_keys: Arc<Mutex<BTreeSet<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether set/remove should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Make set/remove fail for `key` only.
    pub fn reject_writes_to(&self, key: &str) {
        self.rejected_keys.lock().unwrap().insert(key.to_string());
    }

    /// All keys currently stored.
    pub fn keys(&self) -> Vec<String> {
        self.values.lock().unwrap().keys().cloned().collect()
    }

    fn check_write(&self, key: &str) -> Result<(), StorageError> {
        if *self.write_should_fail.lock().unwrap() || self.rejected_keys.lock().unwrap().contains(key) {
            return Err(StorageError::WriteRejected {
                key: key.to_string(),
            });
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.check_write(key)?;
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryStore::new();
        let observer = store.clone();
        store.set_json("streak", &3).unwrap();
        assert_eq!(observer.get_json::<u32>("streak").unwrap(), Some(3));
        assert_eq!(observer.keys(), vec!["streak".to_string()]);
    }

    #[test]
    fn test_write_failure() {
        let store = InMemoryStore::new();
        store.set_write_should_fail(true);
        assert!(matches!(
            store.set_json("k", &1),
            Err(StorageError::WriteRejected { .. })
        ));
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_rejected_key_only() {
        let store = InMemoryStore::new();
        store.reject_writes_to("questBoard");
        assert!(store.set_json("questBoard", &1).is_err());
        assert!(store.set_json("userProgress", &1).is_ok());
        assert_eq!(store.keys(), vec!["userProgress".to_string()]);
    }
}
