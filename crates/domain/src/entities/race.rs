//! Races and subraces.

use serde::{Deserialize, Serialize};

use super::options::{AbilityBonus, Choice, NamedDescription};
use super::resource::{BaseResource, Resource};

/// A playable race.
///
/// `trait_details` is the denormalized view of `traits`: for reference races it
/// is hydrated from the `races/{index}/traits` endpoint, homebrew races carry
/// it inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub base: BaseResource,
    /// Walking speed in feet
    pub speed: u32,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub ability_bonus_options: Option<Choice>,
    pub alignment: Option<String>,
    pub age: Option<String>,
    /// "Small", "Medium", ...
    pub size: String,
    pub size_description: Option<String>,
    pub starting_proficiencies: Vec<BaseResource>,
    pub starting_proficiency_options: Option<Choice>,
    pub languages: Vec<BaseResource>,
    pub language_options: Option<Choice>,
    pub language_desc: Option<String>,
    pub traits: Vec<BaseResource>,
    pub subraces: Vec<BaseResource>,
    #[serde(default)]
    pub trait_details: Vec<NamedDescription>,
}

impl Resource for Race {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrace {
    pub base: BaseResource,
    /// Parent race
    pub race: BaseResource,
    pub description: String,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub starting_proficiencies: Vec<BaseResource>,
    pub languages: Vec<BaseResource>,
    pub language_options: Option<Choice>,
    pub racial_traits: Vec<BaseResource>,
    #[serde(default)]
    pub trait_details: Vec<NamedDescription>,
}

impl Resource for Subrace {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
