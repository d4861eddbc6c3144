use serde::{Deserialize, Serialize};

use super::common::{AbilityBonusDto, ApiReference, ChoiceDto};

/// `GET /api/races/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusDto>,
    #[serde(default)]
    pub ability_bonus_options: Option<ChoiceDto>,
    #[serde(default)]
    pub alignment: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub size_description: Option<String>,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub starting_proficiency_options: Option<ChoiceDto>,
    #[serde(default)]
    pub languages: Vec<ApiReference>,
    #[serde(default)]
    pub language_options: Option<ChoiceDto>,
    #[serde(default)]
    pub language_desc: Option<String>,
    #[serde(default)]
    pub traits: Vec<ApiReference>,
    #[serde(default)]
    pub subraces: Vec<ApiReference>,
}

/// `GET /api/subraces/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubraceDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub race: ApiReference,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusDto>,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub languages: Vec<ApiReference>,
    #[serde(default)]
    pub language_options: Option<ChoiceDto>,
    #[serde(default)]
    pub racial_traits: Vec<ApiReference>,
}
