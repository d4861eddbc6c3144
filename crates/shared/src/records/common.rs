use serde::{Deserialize, Serialize};

/// Stored cross-reference. `url` is empty for references to homebrew
/// entities, which have no remote location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordRef {
    pub index: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AbilityBonusRecord {
    pub ability_score: RecordRef,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceRecord {
    #[serde(default)]
    pub desc: Option<String>,
    pub choose: u32,
    #[serde(rename = "type")]
    pub choice_type: String,
    pub from: ChoiceOptionsRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ChoiceOptionsRecord {
    Options { options: Vec<ChoiceOptionRecord> },
    EquipmentCategory { category: RecordRef },
    ResourceList { url: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ChoiceOptionRecord {
    Reference { item: RecordRef },
    CountedReference { count: u32, of: RecordRef },
    AbilityBonus { ability_score: RecordRef, bonus: i32 },
    Text { text: String },
    Choice { choice: Box<ChoiceRecord> },
    Multiple { items: Vec<ChoiceOptionRecord> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedDescriptionRecord {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRecord {
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DamageRecord {
    pub damage_type: Option<RecordRef>,
    pub damage_dice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DcRecord {
    pub dc_type: RecordRef,
    pub dc_value: Option<u32>,
    pub success_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaOfEffectRecord {
    pub shape: String,
    pub size: u32,
}
