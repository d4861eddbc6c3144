use serde::{Deserialize, Serialize};

use super::common::{ApiReference, CostDto, DamageDto};

/// `GET /api/equipment/{index}`
///
/// Weapons, armor and gear share one endpoint; the kind-specific fields are
/// present only on the matching kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub equipment_category: ApiReference,
    pub cost: CostDto,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub weapon_category: Option<String>,
    #[serde(default)]
    pub weapon_range: Option<String>,
    #[serde(default)]
    pub damage: Option<DamageDto>,
    #[serde(default)]
    pub two_handed_damage: Option<DamageDto>,
    #[serde(default)]
    pub range: Option<RangeDto>,
    #[serde(default)]
    pub properties: Vec<ApiReference>,
    #[serde(default)]
    pub armor_category: Option<String>,
    #[serde(default)]
    pub armor_class: Option<ArmorClassDto>,
    #[serde(default)]
    pub str_minimum: Option<u32>,
    #[serde(default)]
    pub stealth_disadvantage: Option<bool>,
    #[serde(default)]
    pub gear_category: Option<ApiReference>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDto {
    #[serde(default)]
    pub normal: Option<u32>,
    #[serde(default)]
    pub long: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClassDto {
    pub base: u32,
    #[serde(default)]
    pub dex_bonus: bool,
    #[serde(default)]
    pub max_bonus: Option<u32>,
}
