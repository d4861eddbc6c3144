//! Mappers between the three shapes of every resource kind.
//!
//! For each kind there is a triad of pure functions:
//! - `from_api`: wire DTO of the reference API -> domain entity
//! - `from_storage`: homebrew storage record -> domain entity
//! - `to_storage`: domain entity -> homebrew storage record
//!
//! Nested structures (ability bonuses, choices, cost, damage, ...) are mapped by
//! the shared helpers in [`common`]. Cross-references always become
//! [`BaseResource`](charbldr_domain::BaseResource) stubs.

pub mod class;
pub mod class_level;
pub mod common;
pub mod equipment;
pub mod feature;
pub mod race;
pub mod racial_trait;
pub mod spell;
pub mod subclass;
pub mod subrace;

/// The three mapping functions of one resource kind.
///
/// `E` is the domain entity, `D` the wire DTO and `R` the storage record.
pub struct MapperTriad<E, D, R> {
    pub from_api: fn(D) -> E,
    pub from_storage: fn(R) -> E,
    pub to_storage: fn(&E) -> R,
}

impl<E, D, R> MapperTriad<E, D, R> {
    pub const fn new(from_api: fn(D) -> E, from_storage: fn(R) -> E, to_storage: fn(&E) -> R) -> Self {
        Self {
            from_api,
            from_storage,
            to_storage,
        }
    }
}

impl<E, D, R> Clone for MapperTriad<E, D, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, D, R> Copy for MapperTriad<E, D, R> {}

impl<E, D, R> std::fmt::Debug for MapperTriad<E, D, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapperTriad").finish_non_exhaustive()
    }
}
