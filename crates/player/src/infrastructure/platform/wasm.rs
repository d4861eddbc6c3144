//! WASM platform implementations
//!
//! Browser `localStorage` and `gloo-timers` backed adapters.

use crate::ports::outbound::{KeyValueStore, SleepPort, StorageError};

/// Key/value store backed by `window.localStorage`.
///
/// `web_sys::Storage` is not `Send`, so the handle is looked up on every call
/// instead of being held.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::unavailable("no window"))?;
        window
            .local_storage()
            .map_err(|e| StorageError::unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::unavailable("localStorage disabled"))
    }
}

impl KeyValueStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::io(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(|e| {
            // Quota exceeded ends up here
            tracing::error!(key, "Failed to write localStorage: {:?}", e);
            StorageError::io(format!("{:?}", e))
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::io(format!("{:?}", e)))
    }
}

/// Browser sleep using `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleep;

#[async_trait::async_trait(?Send)]
impl SleepPort for GlooSleep {
    async fn sleep_ms(&self, ms: u64) {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
}
