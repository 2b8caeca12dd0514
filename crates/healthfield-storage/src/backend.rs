//! Storage backends.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::StorageError;

/// A device-local key-value storage area.
///
/// Payloads are opaque strings; callers that want typed access go through
/// [`crate::LocalStore`]. Implementations report failures, never panic:
/// callers treat every storage failure as recoverable.
pub trait StorageBackend {
    /// Read the payload stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous payload.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the payload stored under `key`, if any.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Check if the backend holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Browser `localStorage` backend.
///
/// Only compiled for wasm32 targets; everything else uses [`MemoryBackend`].
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageBackend {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageBackend {
    /// Open the window's local storage area.
    ///
    /// Fails when the browser denies access (private browsing modes,
    /// sandboxed frames) or there is no window at all.
    pub fn open() -> Result<Self, StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("localStorage".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|_| StorageError::Backend(format!("get_item failed for {}", key)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Backend(format!("set_item failed for {}", key)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|_| StorageError::Backend(format!("remove_item failed for {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_round_trip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);

        backend.write("key", "value").unwrap();
        assert_eq!(backend.read("key").unwrap().as_deref(), Some("value"));

        backend.write("key", "updated").unwrap();
        assert_eq!(backend.read("key").unwrap().as_deref(), Some("updated"));
    }

    #[test]
    fn test_memory_remove() {
        let backend = MemoryBackend::new();
        backend.write("key", "value").unwrap();
        backend.remove("key").unwrap();
        assert_eq!(backend.read("key").unwrap(), None);
        assert!(backend.is_empty());

        // Removing an absent key is not an error.
        backend.remove("key").unwrap();
    }
}
