//! Homebrew storage records.
//!
//! The persisted shape of user-authored entities inside the homebrew bank
//! (`homebrewObject`). Owned by this application and versioned per entity kind
//! through `HomebrewBankEntry::version`. Every record uses container-level
//! `#[serde(default)]` so that records written by older builds, which lacked
//! later fields, still load.

mod class;
mod common;
mod equipment;
mod race;
mod racial_trait;
mod spell;

pub use class::{
    ClassLevelRecord, ClassRecord, FeatureRecord, LevelSpellcastingRecord, SpellcastingRecord,
    StartingEquipmentRecord, SubclassFeatureRecord, SubclassRecord,
};
pub use common::{
    AbilityBonusRecord, AreaOfEffectRecord, ChoiceOptionRecord, ChoiceOptionsRecord,
    ChoiceRecord, CostRecord, DamageRecord, DcRecord, NamedDescriptionRecord, RecordRef,
};
pub use equipment::{ArmorRecord, EquipmentRecord, WeaponRecord};
pub use race::{RaceRecord, SubraceRecord};
pub use racial_trait::TraitRecord;
pub use spell::{SpellDamageRecord, SpellRecord};

/// Current storage schema version for homebrew records of every kind.
pub const HOMEBREW_RECORD_VERSION: u32 = 1;
