use serde::{Deserialize, Serialize};

use super::common::{ApiReference, ChoiceDto};

/// `GET /api/traits/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub races: Vec<ApiReference>,
    #[serde(default)]
    pub subraces: Vec<ApiReference>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub proficiencies: Vec<ApiReference>,
    #[serde(default)]
    pub proficiency_choices: Option<ChoiceDto>,
    #[serde(default)]
    pub parent: Option<ApiReference>,
}
