use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{ApiReference, AreaOfEffectDto, DcDto};

/// `GET /api/spells/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub higher_level: Vec<String>,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub components: Vec<String>,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub concentration: bool,
    #[serde(default)]
    pub casting_time: String,
    pub level: u8,
    #[serde(default)]
    pub attack_type: Option<String>,
    #[serde(default)]
    pub damage: Option<SpellDamageDto>,
    #[serde(default)]
    pub dc: Option<DcDto>,
    #[serde(default)]
    pub area_of_effect: Option<AreaOfEffectDto>,
    pub school: ApiReference,
    #[serde(default)]
    pub classes: Vec<ApiReference>,
    #[serde(default)]
    pub subclasses: Vec<ApiReference>,
}

/// Damage tables are keyed by level as strings ("1", "5", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDamageDto {
    #[serde(default)]
    pub damage_type: Option<ApiReference>,
    #[serde(default)]
    pub damage_at_slot_level: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub damage_at_character_level: Option<BTreeMap<String, String>>,
}
