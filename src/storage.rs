//! Storage Layer
//!
//! Abstract key-value interface over the browser's localStorage, plus an
//! in-memory implementation for tests.

use crate::error::{GridError, GridResult};

/// Fixed key holding the whole serialized collection (same key as the
/// original web app, so previously saved data keeps loading)
pub const COLLECTION_KEY: &str = "topGrids";

/// Key-value storage contract
///
/// Reads fail open: an absent or unreadable value is reported as `None` and
/// the caller defaults. Writes surface failure distinctly.
pub trait StorageBackend {
    /// Read the value at `key`, or `None` if absent or unreadable
    fn read(&self, key: &str) -> Option<String>;

    /// Write `value` at `key`, replacing any previous value
    fn write(&self, key: &str, value: &str) -> GridResult<()>;
}

/// Browser localStorage backend
#[derive(Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Some(storage) => storage.get_item(key).ok().flatten(),
            None => {
                log::warn!("localStorage unavailable, reading nothing");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> GridResult<()> {
        let storage = Self::storage()
            .ok_or_else(|| GridError::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| GridError::Storage(format!("failed to write key '{}'", key)))
    }
}

/// In-memory storage for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeded storage, for simulating an existing collection
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> GridResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read("missing"), None);

        storage.write("k", "v1").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("v1"));

        storage.write("k", "v2").unwrap();
        assert_eq!(storage.read("k").as_deref(), Some("v2"));
    }

    #[test]
    fn test_seeded_storage() {
        let storage = MemoryStorage::with_entry(COLLECTION_KEY, "[]");
        assert_eq!(storage.read(COLLECTION_KEY).as_deref(), Some("[]"));
    }
}
