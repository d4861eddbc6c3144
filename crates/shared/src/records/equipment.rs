use serde::{Deserialize, Serialize};

use super::common::{CostRecord, DamageRecord, RecordRef};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquipmentRecord {
    pub index: String,
    pub name: String,
    pub url: String,
    pub equipment_category: RecordRef,
    pub cost: CostRecord,
    pub weight: Option<f64>,
    pub description: String,
    pub weapon: Option<WeaponRecord>,
    pub armor: Option<ArmorRecord>,
    pub gear_category: Option<RecordRef>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeaponRecord {
    pub category: String,
    pub range_kind: String,
    pub damage: Option<DamageRecord>,
    pub two_handed_damage: Option<DamageRecord>,
    pub normal_range: Option<u32>,
    pub long_range: Option<u32>,
    pub properties: Vec<RecordRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArmorRecord {
    pub category: String,
    pub base_ac: u32,
    pub dex_bonus: bool,
    pub max_bonus: Option<u32>,
    pub str_minimum: u32,
    pub stealth_disadvantage: bool,
}
