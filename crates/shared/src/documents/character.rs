use serde::{Deserialize, Serialize};

/// Current character document schema version.
pub const CHARACTER_DOCUMENT_VERSION: u32 = 3;

/// The persisted player character.
///
/// The serialized form of `CharacterDocument::default()` is the schema the
/// normalization pass prunes and fills against, so every field is always
/// serialized (including `null` options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDocument {
    pub version: u32,
    pub name: String,
    pub player_name: String,
    /// Race index; a UUID for homebrew races
    pub race: String,
    pub subrace: Option<String>,
    pub class: String,
    pub subclass: Option<String>,
    pub background: String,
    pub alignment: String,
    pub level: u8,
    pub experience: u32,
    #[serde(rename = "str")]
    pub strength: u8,
    #[serde(rename = "dex")]
    pub dexterity: u8,
    #[serde(rename = "con")]
    pub constitution: u8,
    #[serde(rename = "int")]
    pub intelligence: u8,
    #[serde(rename = "wis")]
    pub wisdom: u8,
    #[serde(rename = "cha")]
    pub charisma: u8,
    pub max_hp: u32,
    pub current_hp: u32,
    pub temp_hp: u32,
    pub proficiencies: Vec<String>,
    pub languages: Vec<String>,
    pub inventory: Vec<InventoryEntry>,
    pub spells: Vec<String>,
    pub notes: String,
}

impl Default for CharacterDocument {
    fn default() -> Self {
        Self {
            version: CHARACTER_DOCUMENT_VERSION,
            name: String::new(),
            player_name: String::new(),
            race: String::new(),
            subrace: None,
            class: String::new(),
            subclass: None,
            background: String::new(),
            alignment: String::new(),
            level: 1,
            experience: 0,
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
            max_hp: 0,
            current_hp: 0,
            temp_hp: 0,
            proficiencies: Vec::new(),
            languages: Vec::new(),
            inventory: Vec::new(),
            spells: Vec::new(),
            notes: String::new(),
        }
    }
}

/// One inventory line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntry {
    /// Equipment index; a UUID for homebrew equipment
    pub index: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_homebrew: bool,
}
