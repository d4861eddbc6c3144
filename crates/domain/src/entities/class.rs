//! Classes, subclasses, class levels and class features.

use serde::{Deserialize, Serialize};

use super::options::{Choice, NamedDescription};
use super::resource::{BaseResource, Resource};

/// A character class.
///
/// `levels` is empty for reference classes (their progression is resolved on
/// demand through the class-level endpoints); homebrew classes store their
/// progression inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterClass {
    pub base: BaseResource,
    pub hit_die: u32,
    pub proficiency_choices: Vec<Choice>,
    pub proficiencies: Vec<BaseResource>,
    pub saving_throws: Vec<BaseResource>,
    pub starting_equipment: Vec<StartingEquipment>,
    pub starting_equipment_options: Vec<Choice>,
    pub subclasses: Vec<BaseResource>,
    pub spellcasting: Option<Spellcasting>,
    #[serde(default)]
    pub levels: Vec<ClassLevel>,
}

impl Resource for CharacterClass {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartingEquipment {
    pub equipment: BaseResource,
    pub quantity: u32,
}

/// How a class casts spells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spellcasting {
    /// Class level at which spellcasting starts
    pub level: u8,
    pub spellcasting_ability: BaseResource,
    pub info: Vec<NamedDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    pub base: BaseResource,
    pub class: BaseResource,
    pub subclass_flavor: String,
    pub description: String,
    pub spells: Vec<BaseResource>,
    /// Level-gated features, hydrated for reference subclasses
    #[serde(default)]
    pub features: Vec<SubclassFeature>,
}

impl Resource for Subclass {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassFeature {
    pub level: u8,
    pub name: String,
    pub description: String,
}

/// One row of a class (or subclass) progression table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    pub base: BaseResource,
    pub level: u8,
    pub class: BaseResource,
    pub subclass: Option<BaseResource>,
    pub ability_score_bonuses: Option<u8>,
    pub proficiency_bonus: Option<u8>,
    pub features: Vec<BaseResource>,
    #[serde(default)]
    pub feature_details: Vec<NamedDescription>,
    pub spellcasting: Option<LevelSpellcasting>,
}

impl Resource for ClassLevel {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpellcasting {
    pub cantrips_known: Option<u8>,
    pub spells_known: Option<u8>,
    /// Slots per spell level; index 0 is 1st-level slots
    pub spell_slots: Vec<u8>,
}

/// A class or subclass feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub base: BaseResource,
    pub class: BaseResource,
    pub subclass: Option<BaseResource>,
    pub level: u8,
    pub description: String,
    pub parent: Option<BaseResource>,
}

impl Feature {
    pub fn to_named_description(&self) -> NamedDescription {
        NamedDescription::new(self.base.name.clone(), self.description.clone())
    }
}

impl Resource for Feature {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
