//! Wire DTOs of the 5e SRD reference API.
//!
//! These types mirror the provider's JSON schema (snake_case, `desc` as a list
//! of paragraphs). Fields the mappers do not use are simply not declared;
//! serde ignores unknown keys. Optional lists default to empty.

mod class;
mod common;
mod equipment;
mod race;
mod racial_trait;
mod spell;

pub use class::{
    ClassDto, ClassLevelDto, FeatureDto, LevelSpellcastingDto, SpellcastingDto,
    SpellcastingInfoDto, StartingEquipmentDto, SubclassDto, SubclassSpellDto,
};
pub use common::{
    AbilityBonusDto, ApiReference, AreaOfEffectDto, ChoiceDto, CostDto, DamageDto, DcDto,
    OptionDto, OptionSetDto, ResourceListDto,
};
pub use equipment::{ArmorClassDto, EquipmentDto, RangeDto};
pub use race::{RaceDto, SubraceDto};
pub use racial_trait::TraitDto;
pub use spell::{SpellDamageDto, SpellDto};
