//! Equipment: weapons, armor, adventuring gear.

use serde::{Deserialize, Serialize};

use super::options::{Cost, Damage};
use super::resource::{BaseResource, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub base: BaseResource,
    pub equipment_category: BaseResource,
    pub cost: Cost,
    /// Weight in pounds
    pub weight: Option<f64>,
    pub description: String,
    pub weapon: Option<WeaponStats>,
    pub armor: Option<ArmorStats>,
    pub gear_category: Option<BaseResource>,
    /// Bundle size for items sold in bulk (arrows, caltrops)
    pub quantity: Option<u32>,
}

impl Resource for Equipment {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponStats {
    /// "Simple" or "Martial"
    pub category: String,
    /// "Melee" or "Ranged"
    pub range_kind: String,
    pub damage: Option<Damage>,
    pub two_handed_damage: Option<Damage>,
    pub normal_range: Option<u32>,
    pub long_range: Option<u32>,
    pub properties: Vec<BaseResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorStats {
    /// "Light", "Medium", "Heavy", "Shield"
    pub category: String,
    pub base_ac: u32,
    pub dex_bonus: bool,
    pub max_bonus: Option<u32>,
    pub str_minimum: u32,
    pub stealth_disadvantage: bool,
}
