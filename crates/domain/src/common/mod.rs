//! Common utility functions shared across the CharBldr crates.
//!
//! Pure functions only; everything here must work on both native and WASM
//! targets.

pub mod string;

pub use string::{kebab_case, some_if_not_empty};
