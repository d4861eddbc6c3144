//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the storage and
//! sleep ports defined in `ports/outbound`.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;

// Re-export the platform-specific types explicitly
#[cfg(target_arch = "wasm32")]
pub use wasm::{GlooSleep, LocalStorageStore};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{default_storage_dir, FileKeyValueStore, TokioSleep};

pub use memory::MemoryKeyValueStore;
