//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing the repositories and stores to talk to durable storage, the network
//! and the clock without depending on concrete implementations.

pub mod http_port;
pub mod platform;
pub mod storage_port;

pub use http_port::{HttpResponse, HttpTransport, TransportError};
pub use platform::{storage_keys, ClockPort, SleepPort};
pub use storage_port::{KeyValueStore, StorageError};

#[cfg(test)]
pub use platform::MockClockPort;
#[cfg(test)]
pub use storage_port::MockKeyValueStore;
