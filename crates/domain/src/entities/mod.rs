//! Domain entities.
//!
//! Plain data structs, one per resource kind, each embedding a
//! [`BaseResource`]. They are built exclusively by the mappers in
//! `charbldr-player`; consumers only read them.

mod class;
mod equipment;
mod options;
mod race;
mod racial_trait;
mod resource;
mod spell;

pub use class::{
    CharacterClass, ClassLevel, Feature, LevelSpellcasting, Spellcasting, StartingEquipment,
    Subclass, SubclassFeature,
};
pub use equipment::{ArmorStats, Equipment, WeaponStats};
pub use options::{
    AbilityBonus, AreaOfEffect, Choice, ChoiceOption, ChoiceOptions, Cost, Damage,
    DifficultyClass, NamedDescription,
};
pub use race::{Race, Subrace};
pub use racial_trait::Trait;
pub use resource::{is_homebrew_index, BaseResource, Resource, ResourceList};
pub use spell::{Spell, SpellDamage};
