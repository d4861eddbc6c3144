//! Spells.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::options::{AreaOfEffect, DifficultyClass};
use super::resource::{BaseResource, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub base: BaseResource,
    pub description: String,
    /// Effect when cast with a higher-level slot
    pub higher_level: Option<String>,
    pub range: String,
    /// "V", "S", "M"
    pub components: Vec<String>,
    pub material: Option<String>,
    pub ritual: bool,
    pub duration: String,
    pub concentration: bool,
    pub casting_time: String,
    /// Spell level; 0 is a cantrip
    pub level: u8,
    pub attack_type: Option<String>,
    pub damage: Option<SpellDamage>,
    pub dc: Option<DifficultyClass>,
    pub area_of_effect: Option<AreaOfEffect>,
    pub school: BaseResource,
    pub classes: Vec<BaseResource>,
    pub subclasses: Vec<BaseResource>,
}

impl Spell {
    pub fn is_cantrip(&self) -> bool {
        self.level == 0
    }
}

impl Resource for Spell {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

/// Damage scaling of a spell, keyed by slot level or character level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellDamage {
    pub damage_type: Option<BaseResource>,
    pub at_slot_level: BTreeMap<u8, String>,
    pub at_character_level: BTreeMap<u8, String>,
}
