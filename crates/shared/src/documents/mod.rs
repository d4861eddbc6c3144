//! Persisted documents.
//!
//! Both documents carry an explicit `version`. Anything read from storage or
//! imported by the user is upgraded to the current version before it is
//! deserialized into these types.

mod character;
mod homebrew_bank;

pub use character::{CharacterDocument, InventoryEntry, CHARACTER_DOCUMENT_VERSION};
pub use homebrew_bank::{HomebrewBank, HomebrewBankEntry, HOMEBREW_BANK_VERSION};
