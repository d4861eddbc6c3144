//! Persistent response cache for the reference API.
//!
//! Remote reference data never changes between releases of the dataset, so
//! responses are kept forever: no TTL, no eviction. Keys are the exact request
//! URLs and values are the raw JSON text of the response.

use std::sync::Arc;

use serde_json::Value;

use crate::ports::outbound::KeyValueStore;

/// A durable memo of successful responses.
///
/// The cache never fails its caller: storage errors are logged and turn into a
/// miss (on read) or a dropped write (on write).
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn KeyValueStore>,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Get a cached response. Unreadable or corrupt entries count as a miss.
    pub fn get(&self, url: &str) -> Option<Value> {
        let raw = match self.store.load(url) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(url, error = %e, "Failed to read response cache");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(url, error = %e, "Discarding corrupt cache entry");
                None
            }
        }
    }

    /// Store a response body, replacing any previous entry for `url`.
    pub fn set(&self, url: &str, body: &str) {
        if let Err(e) = self.store.save(url, body) {
            tracing::warn!(url, error = %e, "Failed to write response cache");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::MemoryKeyValueStore;
    use crate::ports::outbound::{MockKeyValueStore, StorageError};

    #[test]
    fn set_then_get_returns_parsed_json() {
        let cache = ResponseCache::new(Arc::new(MemoryKeyValueStore::new()));
        let url = "https://srd.test/api/races/dwarf";

        assert!(cache.get(url).is_none());
        cache.set(url, r#"{"index":"dwarf"}"#);

        assert_eq!(cache.get(url), Some(serde_json::json!({ "index": "dwarf" })));
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store.save("https://srd.test/api/spells", "{truncated").expect("save");

        let cache = ResponseCache::new(store);
        assert!(cache.get("https://srd.test/api/spells").is_none());
    }

    #[test]
    fn storage_failures_are_swallowed() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_save()
            .returning(|_, _| Err(StorageError::io("disk full")));
        store
            .expect_load()
            .returning(|_| Err(StorageError::unavailable("locked")));

        let cache = ResponseCache::new(Arc::new(store));
        cache.set("https://srd.test/api/races", "{}");
        assert!(cache.get("https://srd.test/api/races").is_none());
    }
}
