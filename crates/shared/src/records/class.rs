use serde::{Deserialize, Serialize};

use super::common::{ChoiceRecord, NamedDescriptionRecord, RecordRef};

/// Homebrew class. Its level progression is stored inline in `levels`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub hit_die: u32,
    pub proficiency_choices: Vec<ChoiceRecord>,
    pub proficiencies: Vec<RecordRef>,
    pub saving_throws: Vec<RecordRef>,
    pub starting_equipment: Vec<StartingEquipmentRecord>,
    pub starting_equipment_options: Vec<ChoiceRecord>,
    pub subclasses: Vec<RecordRef>,
    pub spellcasting: Option<SpellcastingRecord>,
    pub levels: Vec<ClassLevelRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartingEquipmentRecord {
    pub equipment: RecordRef,
    pub quantity: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellcastingRecord {
    pub level: u8,
    pub spellcasting_ability: RecordRef,
    pub info: Vec<NamedDescriptionRecord>,
}

/// Homebrew subclass. Features are stored inline per level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubclassRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub class: RecordRef,
    pub subclass_flavor: String,
    pub description: String,
    pub spells: Vec<RecordRef>,
    pub features: Vec<SubclassFeatureRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubclassFeatureRecord {
    pub level: u8,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassLevelRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub level: u8,
    pub class: RecordRef,
    pub subclass: Option<RecordRef>,
    pub ability_score_bonuses: Option<u8>,
    pub proficiency_bonus: Option<u8>,
    pub features: Vec<RecordRef>,
    pub feature_details: Vec<NamedDescriptionRecord>,
    pub spellcasting: Option<LevelSpellcastingRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelSpellcastingRecord {
    pub cantrips_known: Option<u8>,
    pub spells_known: Option<u8>,
    pub spell_slots: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub class: RecordRef,
    pub subclass: Option<RecordRef>,
    pub level: u8,
    pub description: String,
    pub parent: Option<RecordRef>,
}
