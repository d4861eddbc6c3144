//! CharBldr Shared - serialized shapes owned by the boundaries.
//!
//! This crate contains every JSON shape that crosses a boundary:
//! - `dto` - responses of the remote 5e SRD reference API (read-only input)
//! - `records` - homebrew storage records persisted in the local bank
//! - `documents` - the character document and the homebrew bank document
//!
//! # Design Principles
//!
//! 1. **No business logic** - pure data types and serialization
//! 2. **WASM compatible** - must compile for both native and wasm32 targets
//! 3. **No domain types** - conversions live in `charbldr-player::mappers`

pub mod documents;
pub mod dto;
pub mod records;

pub use documents::{
    CharacterDocument, HomebrewBank, HomebrewBankEntry, InventoryEntry,
    CHARACTER_DOCUMENT_VERSION, HOMEBREW_BANK_VERSION,
};
