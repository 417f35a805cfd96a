//! Key-value storage trait abstraction.
//!
//! Every durable value in the app (session flags, progress, community
//! boards, journals) lives under a fixed string key; see
//! [`crate::storage::keys`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Durable string-keyed storage.
///
/// Values are JSON documents. Writes are durable once `set` returns.
pub trait KeyValueStore: Send + Sync {
    /// Read a raw value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError>;

    /// Write a raw value.
    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Read and decode a typed value.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        Self: Sized,
    {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StorageError::serde(key, e)),
            None => Ok(None),
        }
    }

    /// Encode and write a typed value.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(value).map_err(|e| StorageError::serde(key, e))?;
        self.set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: serde_json::Value) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}
