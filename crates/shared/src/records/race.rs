use serde::{Deserialize, Serialize};

use super::common::{AbilityBonusRecord, ChoiceRecord, NamedDescriptionRecord, RecordRef};

/// Homebrew race. Traits are carried inline in `trait_details`; homebrew has
/// no secondary endpoint to hydrate them from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub speed: u32,
    pub ability_bonuses: Vec<AbilityBonusRecord>,
    pub ability_bonus_options: Option<ChoiceRecord>,
    pub alignment: Option<String>,
    pub age: Option<String>,
    pub size: String,
    pub size_description: Option<String>,
    pub starting_proficiencies: Vec<RecordRef>,
    pub starting_proficiency_options: Option<ChoiceRecord>,
    pub languages: Vec<RecordRef>,
    pub language_options: Option<ChoiceRecord>,
    pub language_desc: Option<String>,
    pub traits: Vec<RecordRef>,
    pub subraces: Vec<RecordRef>,
    pub trait_details: Vec<NamedDescriptionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubraceRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub race: RecordRef,
    pub description: String,
    pub ability_bonuses: Vec<AbilityBonusRecord>,
    pub starting_proficiencies: Vec<RecordRef>,
    pub languages: Vec<RecordRef>,
    pub language_options: Option<ChoiceRecord>,
    pub racial_traits: Vec<RecordRef>,
    pub trait_details: Vec<NamedDescriptionRecord>,
}
