use serde::{Deserialize, Serialize};

/// `{ index, name, url }` - the API's cross-reference shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReference {
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Catalog response of `GET /api/{resource}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListDto {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<ApiReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonusDto {
    pub ability_score: ApiReference,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDto {
    #[serde(default)]
    pub desc: Option<String>,
    pub choose: u32,
    #[serde(rename = "type")]
    pub choice_type: String,
    pub from: OptionSetDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option_set_type", rename_all = "snake_case")]
pub enum OptionSetDto {
    OptionsArray {
        #[serde(default)]
        options: Vec<OptionDto>,
    },
    EquipmentCategory {
        equipment_category: ApiReference,
    },
    ResourceList {
        resource_list_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option_type", rename_all = "snake_case")]
pub enum OptionDto {
    Reference {
        item: ApiReference,
    },
    CountedReference {
        count: u32,
        of: ApiReference,
    },
    AbilityBonus {
        ability_score: ApiReference,
        bonus: i32,
    },
    String {
        string: String,
    },
    Choice {
        choice: ChoiceDto,
    },
    Multiple {
        #[serde(default)]
        items: Vec<OptionDto>,
    },
    /// Option kinds the builder does not offer (breath weapons, ideals, ...)
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDto {
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageDto {
    #[serde(default)]
    pub damage_type: Option<ApiReference>,
    #[serde(default)]
    pub damage_dice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcDto {
    pub dc_type: ApiReference,
    #[serde(default)]
    pub dc_value: Option<u32>,
    /// Spells call this `dc_success`
    #[serde(alias = "dc_success", default)]
    pub success_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOfEffectDto {
    #[serde(rename = "type")]
    pub shape: String,
    pub size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_with_nested_options_deserializes() {
        let json = serde_json::json!({
            "desc": "Choose one language",
            "choose": 1,
            "type": "languages",
            "from": {
                "option_set_type": "options_array",
                "options": [
                    { "option_type": "reference", "item": { "index": "elvish", "name": "Elvish", "url": "/api/languages/elvish" } },
                    { "option_type": "breath", "name": "Fire Breath" }
                ]
            }
        });

        let choice: ChoiceDto = serde_json::from_value(json).expect("valid choice");
        assert_eq!(choice.choose, 1);
        match choice.from {
            OptionSetDto::OptionsArray { options } => {
                assert_eq!(options.len(), 2);
                assert!(matches!(options[0], OptionDto::Reference { .. }));
                assert_eq!(options[1], OptionDto::Unsupported);
            }
            other => panic!("unexpected option set: {:?}", other),
        }
    }

    #[test]
    fn spell_dc_accepts_dc_success_alias() {
        let json = serde_json::json!({
            "dc_type": { "index": "dex", "name": "DEX", "url": "/api/ability-scores/dex" },
            "dc_success": "half"
        });
        let dc: DcDto = serde_json::from_value(json).expect("valid dc");
        assert_eq!(dc.success_type, "half");
        assert_eq!(dc.dc_value, None);
    }
}
