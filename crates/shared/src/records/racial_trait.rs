use serde::{Deserialize, Serialize};

use super::common::{ChoiceRecord, RecordRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TraitRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub races: Vec<RecordRef>,
    pub subraces: Vec<RecordRef>,
    pub description: String,
    pub proficiencies: Vec<RecordRef>,
    pub proficiency_choices: Option<ChoiceRecord>,
    pub parent: Option<RecordRef>,
}
