//! Nested value objects shared by several resource kinds.

use serde::{Deserialize, Serialize};

use super::resource::BaseResource;

/// A fixed bonus to one ability score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityBonus {
    pub ability_score: BaseResource,
    pub bonus: i32,
}

/// "Choose N from ..." as offered by races, classes and traits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    pub description: Option<String>,
    pub choose: u32,
    /// What is being chosen (e.g. "proficiencies", "languages", "equipment")
    pub choice_type: String,
    pub from: ChoiceOptions,
}

/// Where the options of a [`Choice`] come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChoiceOptions {
    /// An explicit list of options
    Options { options: Vec<ChoiceOption> },
    /// Any item of an equipment category
    EquipmentCategory { category: BaseResource },
    /// Any entry of a resource list endpoint
    ResourceList { url: String },
}

/// A single selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChoiceOption {
    Reference { item: BaseResource },
    CountedReference { count: u32, of: BaseResource },
    AbilityBonus { bonus: AbilityBonus },
    Text { text: String },
    Choice { choice: Box<Choice> },
    Multiple { items: Vec<ChoiceOption> },
}

/// Price of a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cost {
    pub quantity: u32,
    /// Coin denomination ("cp", "sp", "gp", ...)
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    pub damage_type: Option<BaseResource>,
    /// Dice expression such as "1d8" or "2d6+3"
    pub damage_dice: String,
}

/// Saving throw difficulty class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyClass {
    pub dc_type: BaseResource,
    pub dc_value: Option<u32>,
    /// "none", "half", "other"
    pub success_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaOfEffect {
    /// "sphere", "cone", "cylinder", "line", "cube"
    pub shape: String,
    pub size: u32,
}

/// Denormalized relation: just enough to display a trait or feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedDescription {
    pub name: String,
    pub description: String,
}

impl NamedDescription {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
