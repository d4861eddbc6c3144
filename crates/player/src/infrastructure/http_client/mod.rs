//! HTTP transports for the reference API.
//!
//! Selected at compile time like the platform adapters.

#[cfg(not(target_arch = "wasm32"))]
mod reqwest_transport;

#[cfg(target_arch = "wasm32")]
mod gloo_transport;

#[cfg(not(target_arch = "wasm32"))]
pub use reqwest_transport::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use gloo_transport::GlooTransport;
