use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{AreaOfEffectRecord, DcRecord, RecordRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub description: String,
    pub higher_level: Option<String>,
    pub range: String,
    pub components: Vec<String>,
    pub material: Option<String>,
    pub ritual: bool,
    pub duration: String,
    pub concentration: bool,
    pub casting_time: String,
    pub level: u8,
    pub attack_type: Option<String>,
    pub damage: Option<SpellDamageRecord>,
    pub dc: Option<DcRecord>,
    pub area_of_effect: Option<AreaOfEffectRecord>,
    pub school: RecordRef,
    pub classes: Vec<RecordRef>,
    pub subclasses: Vec<RecordRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellDamageRecord {
    pub damage_type: Option<RecordRef>,
    pub at_slot_level: BTreeMap<String, String>,
    pub at_character_level: BTreeMap<String, String>,
}
