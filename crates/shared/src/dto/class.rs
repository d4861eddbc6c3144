use serde::{Deserialize, Serialize};

use super::common::{ApiReference, ChoiceDto};

/// `GET /api/classes/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub hit_die: u32,
    #[serde(default)]
    pub proficiency_choices: Vec<ChoiceDto>,
    #[serde(default)]
    pub proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub saving_throws: Vec<ApiReference>,
    #[serde(default)]
    pub starting_equipment: Vec<StartingEquipmentDto>,
    #[serde(default)]
    pub starting_equipment_options: Vec<ChoiceDto>,
    /// Path of the level table, e.g. `/api/classes/wizard/levels`
    #[serde(default)]
    pub class_levels: String,
    #[serde(default)]
    pub subclasses: Vec<ApiReference>,
    #[serde(default)]
    pub spellcasting: Option<SpellcastingDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingEquipmentDto {
    pub equipment: ApiReference,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingDto {
    pub level: u8,
    pub spellcasting_ability: ApiReference,
    #[serde(default)]
    pub info: Vec<SpellcastingInfoDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingInfoDto {
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
}

/// `GET /api/subclasses/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub class: ApiReference,
    #[serde(default)]
    pub subclass_flavor: String,
    #[serde(default)]
    pub desc: Vec<String>,
    /// Path of the level table, e.g. `/api/subclasses/evocation/levels`
    #[serde(default)]
    pub subclass_levels: String,
    #[serde(default)]
    pub spells: Vec<SubclassSpellDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassSpellDto {
    pub spell: ApiReference,
}

/// One entry of `GET /api/classes/{index}/levels` or
/// `GET /api/subclasses/{index}/levels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevelDto {
    pub index: String,
    #[serde(default)]
    pub url: String,
    pub level: u8,
    pub class: ApiReference,
    #[serde(default)]
    pub subclass: Option<ApiReference>,
    #[serde(default)]
    pub ability_score_bonuses: Option<u8>,
    #[serde(default)]
    pub prof_bonus: Option<u8>,
    #[serde(default)]
    pub features: Vec<ApiReference>,
    #[serde(default)]
    pub spellcasting: Option<LevelSpellcastingDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpellcastingDto {
    #[serde(default)]
    pub cantrips_known: Option<u8>,
    #[serde(default)]
    pub spells_known: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_1: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_2: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_3: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_4: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_5: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_6: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_7: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_8: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_9: Option<u8>,
}

impl LevelSpellcastingDto {
    /// Slot counts for spell levels 1 through 9, in order.
    pub fn spell_slots(&self) -> [Option<u8>; 9] {
        [
            self.spell_slots_level_1,
            self.spell_slots_level_2,
            self.spell_slots_level_3,
            self.spell_slots_level_4,
            self.spell_slots_level_5,
            self.spell_slots_level_6,
            self.spell_slots_level_7,
            self.spell_slots_level_8,
            self.spell_slots_level_9,
        ]
    }
}

/// `GET /api/features/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub class: ApiReference,
    #[serde(default)]
    pub subclass: Option<ApiReference>,
    pub level: u8,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub parent: Option<ApiReference>,
}
