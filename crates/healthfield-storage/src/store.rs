//! Typed storage wrapper with automatic serialization.

use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};

use crate::backend::{MemoryBackend, StorageBackend};
use crate::StorageError;

/// Type-safe view over a [`StorageBackend`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap; all clones share
/// the same backend.
#[derive(Clone)]
pub struct LocalStore {
    backend: Rc<dyn StorageBackend>,
}

impl LocalStore {
    /// Wrap an explicit backend.
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Open an in-memory store (native builds, tests).
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Open the browser's `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn browser() -> Result<Self, StorageError> {
        Ok(Self::new(crate::backend::LocalStorageBackend::open()?))
    }

    /// Get a value, deserializing it from its stored payload.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.read(key)? {
            Some(payload) => {
                let value: T = serde_json::from_str(&payload)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value, serializing it to a JSON payload.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let payload = serde_json::to_string(value)?;
        self.backend.write(key, &payload)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.remove(key)
    }
}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust
/// # use healthfield_storage::storage_key;
/// let key = storage_key!("cart", "session-1");
/// assert_eq!(key, "cart:session-1");
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Snapshot {
        version: u32,
        names: Vec<String>,
    }

    #[test]
    fn test_typed_round_trip() {
        let store = LocalStore::in_memory();
        let snapshot = Snapshot {
            version: 3,
            names: vec!["amoxicillin".to_string(), "paracetamol".to_string()],
        };

        store.set("snapshot", &snapshot).unwrap();
        let loaded: Option<Snapshot> = store.get("snapshot").unwrap();
        assert_eq!(loaded, Some(snapshot));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = LocalStore::in_memory();
        let loaded: Option<Snapshot> = store.get("missing").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_delete() {
        let store = LocalStore::in_memory();
        store.set("key", &1u32).unwrap();
        store.delete("key").unwrap();
        let loaded: Option<u32> = store.get("key").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let backend = MemoryBackend::new();
        backend.write("snapshot", "{not valid json").unwrap();
        let store = LocalStore::new(backend);

        let result: Result<Option<Snapshot>, _> = store.get("snapshot");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_storage_key_macro() {
        assert_eq!(storage_key!("cart", "abc"), "cart:abc");
        assert_eq!(storage_key!("cart", "abc", 7), "cart:abc:7");
    }
}
