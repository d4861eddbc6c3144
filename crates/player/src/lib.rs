//! Character builder core.
//!
//! Resolves 5e reference resources from the remote SRD API merged with a local
//! homebrew overlay, and upgrades persisted documents (characters and the
//! homebrew bank) through versioned migration chains.
//! Multi-platform support is provided via compile-time `cfg` selection.

pub mod config;
pub mod infrastructure;
pub mod mappers;
pub mod migrations;
pub mod ports;
pub mod repositories;
pub mod stores;

pub use config::{ConfigError, PlayerConfig};
pub use migrations::{migrate_character, upgrade_character, MigrationError};
pub use repositories::{Repositories, RepositoryContext, RepositoryError};
pub use stores::{CharacterStore, HomebrewStore};
