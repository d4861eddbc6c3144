//! CharBldr domain model.
//!
//! The canonical in-memory shape of every game resource the character builder
//! consumes. A resolved [`Race`] looks the same whether it came from the
//! reference API or from the local homebrew bank; only
//! [`BaseResource::is_homebrew`] tells them apart.

pub mod common;
pub mod entities;
pub mod error;
pub mod resource_type;

pub use entities::{
    is_homebrew_index, AbilityBonus, AreaOfEffect, ArmorStats, BaseResource, CharacterClass,
    Choice, ChoiceOption, ChoiceOptions, ClassLevel, Cost, Damage, DifficultyClass, Equipment,
    Feature, LevelSpellcasting, NamedDescription, Race, Resource, ResourceList, Spell,
    SpellDamage, Spellcasting, StartingEquipment, Subclass, SubclassFeature, Subrace, Trait,
    WeaponStats,
};
pub use error::DomainError;
pub use resource_type::ResourceType;
