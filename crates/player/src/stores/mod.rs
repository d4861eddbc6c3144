//! Durable stores owned by the player.
//!
//! Each store is the single writer of its storage key(s) and runs persisted
//! documents through their migration chain on the way in.

pub mod character;
pub mod homebrew;

pub use character::{CharacterStore, CharacterStoreError};
pub use homebrew::{HomebrewError, HomebrewStore};
