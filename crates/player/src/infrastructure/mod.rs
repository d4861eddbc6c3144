//! Adapters for the outbound ports, plus the reference API client and its
//! response cache.

pub mod cache;
pub mod clock;
pub mod http_client;
pub mod platform;
pub mod srd_api;

#[cfg(test)]
pub mod testing;

pub use cache::ResponseCache;
pub use clock::SystemClock;
pub use srd_api::{ApiError, RetryPolicy, SrdApiClient, DEFAULT_API_URL};
