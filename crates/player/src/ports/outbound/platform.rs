//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. Repository and migration code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Retry and timestamp logic is testable without real time passing

use chrono::{DateTime, Utc};

/// Wall clock, injected so homebrew timestamps are deterministic in tests.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Async sleep abstraction
///
/// The only suspension point of the rate-limit retry loop besides the request
/// itself.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait SleepPort: Send + Sync {
    async fn sleep_ms(&self, ms: u64);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the contract for
/// what keys are used across the application.
pub mod storage_keys {
    /// The whole homebrew bank document
    pub const HOMEBREW_BANK: &str = "homebrewBank";
    /// Prefix of persisted character documents (`character/{slot}`)
    pub const CHARACTER_PREFIX: &str = "character/";
}
