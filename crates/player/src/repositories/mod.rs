//! Repositories - merge the remote reference API with the homebrew overlay.
//!
//! Every repository resolves an index against the overlay first and only
//! then against the remote API. Consumers never touch the cache, the API
//! client or the overlay directly.

pub mod class_level;
pub mod race;
pub mod racial_trait;
pub mod resource;
pub mod subclass;

use std::sync::Arc;

use charbldr_domain::{CharacterClass, Equipment, Feature, ResourceType, Spell};
use charbldr_shared::dto::{ClassDto, EquipmentDto, FeatureDto, SpellDto};
use charbldr_shared::records::{ClassRecord, EquipmentRecord, FeatureRecord, SpellRecord};
use thiserror::Error;

use crate::infrastructure::srd_api::{ApiError, SrdApiClient};
use crate::mappers;
use crate::stores::{HomebrewError, HomebrewStore};

pub use class_level::ClassLevelRepository;
pub use race::{RaceRepository, SubraceRepository};
pub use racial_trait::TraitRepository;
pub use resource::ResourceRepository;
pub use subclass::SubclassRepository;

pub type ClassRepository = ResourceRepository<CharacterClass, ClassDto, ClassRecord>;
pub type SpellRepository = ResourceRepository<Spell, SpellDto, SpellRecord>;
pub type EquipmentRepository = ResourceRepository<Equipment, EquipmentDto, EquipmentRecord>;
pub type FeatureRepository = ResourceRepository<Feature, FeatureDto, FeatureRecord>;

/// Shared handles every repository resolves through.
#[derive(Clone)]
pub struct RepositoryContext {
    pub api: Arc<SrdApiClient>,
    pub homebrew: Arc<HomebrewStore>,
}

impl RepositoryContext {
    pub fn new(api: Arc<SrdApiClient>, homebrew: Arc<HomebrewStore>) -> Self {
        Self { api, homebrew }
    }
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Reference API error: {0}")]
    Api(#[from] ApiError),

    #[error("Homebrew error: {0}")]
    Homebrew(#[from] HomebrewError),

    /// A stored homebrew object does not match its record shape
    #[error("Invalid homebrew record {index}: {message}")]
    InvalidRecord { index: String, message: String },
}

impl RepositoryError {
    pub fn invalid_record(index: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidRecord {
            index: index.into(),
            message: message.to_string(),
        }
    }
}

pub fn class_repository(context: RepositoryContext) -> ClassRepository {
    ResourceRepository::new(context, ResourceType::Classes, mappers::class::triad())
}

pub fn spell_repository(context: RepositoryContext) -> SpellRepository {
    ResourceRepository::new(context, ResourceType::Spells, mappers::spell::triad())
}

pub fn equipment_repository(context: RepositoryContext) -> EquipmentRepository {
    ResourceRepository::new(context, ResourceType::Equipment, mappers::equipment::triad())
}

pub fn feature_repository(context: RepositoryContext) -> FeatureRepository {
    ResourceRepository::new(context, ResourceType::Features, mappers::feature::triad())
}

/// One repository per entity kind, all sharing a single context.
pub struct Repositories {
    pub races: RaceRepository,
    pub subraces: SubraceRepository,
    pub traits: TraitRepository,
    pub classes: ClassRepository,
    pub subclasses: SubclassRepository,
    pub class_levels: ClassLevelRepository,
    pub features: FeatureRepository,
    pub spells: SpellRepository,
    pub equipment: EquipmentRepository,
}

impl Repositories {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            races: RaceRepository::new(context.clone()),
            subraces: SubraceRepository::new(context.clone()),
            traits: TraitRepository::new(context.clone()),
            classes: class_repository(context.clone()),
            subclasses: SubclassRepository::new(context.clone()),
            class_levels: ClassLevelRepository::new(context.clone()),
            features: feature_repository(context.clone()),
            spells: spell_repository(context.clone()),
            equipment: equipment_repository(context),
        }
    }
}
