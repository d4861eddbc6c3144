//! In-memory key/value store.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ports::outbound::{KeyValueStore, StorageError};

/// Volatile store used in tests and as a fallback when no durable storage is
/// available.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.values.read().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self.values.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self.values.write().map_err(|_| StorageError::LockPoisoned)?;
        guard.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_remove() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.load("k").expect("load"), None);

        store.save("k", "v1").expect("save");
        store.save("k", "v2").expect("save");
        assert_eq!(store.load("k").expect("load").as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove("k").expect("remove");
        store.remove("k").expect("removing twice is fine");
        assert!(store.is_empty());
    }
}
