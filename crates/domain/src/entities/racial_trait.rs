//! Racial traits.

use serde::{Deserialize, Serialize};

use super::options::Choice;
use super::resource::{BaseResource, Resource};

/// A racial trait such as "Darkvision" or "Dwarven Resilience".
///
/// `races` and `subraces` point back at the owners; a homebrew trait may
/// reference either a homebrew race (UUID) or a reference race ("dwarf").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    pub base: BaseResource,
    pub races: Vec<BaseResource>,
    pub subraces: Vec<BaseResource>,
    pub description: String,
    pub proficiencies: Vec<BaseResource>,
    pub proficiency_choices: Option<Choice>,
    pub parent: Option<BaseResource>,
}

impl Trait {
    /// Whether this trait is granted by the given race or subrace index.
    pub fn belongs_to(&self, owner_index: &str) -> bool {
        self.races
            .iter()
            .chain(self.subraces.iter())
            .any(|owner| owner.index == owner_index)
    }
}

impl Resource for Trait {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
