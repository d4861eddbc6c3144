//! Reference API payloads, trimmed to the fields the mappers read.

use serde_json::{json, Value};

pub const BASE_URL: &str = "https://srd.test/api";

pub fn url(path: &str) -> String {
    format!("{}/{}", BASE_URL, path)
}

pub fn reference(resource: &str, index: &str, name: &str) -> Value {
    json!({ "index": index, "name": name, "url": format!("/api/{}/{}", resource, index) })
}

pub fn catalog(resource: &str, entries: &[(&str, &str)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(index, name)| reference(resource, index, name))
        .collect();
    json!({ "count": results.len(), "results": results })
}

pub fn dwarf() -> Value {
    json!({
        "index": "dwarf",
        "name": "Dwarf",
        "url": "/api/races/dwarf",
        "speed": 25,
        "ability_bonuses": [
            { "ability_score": reference("ability-scores", "con", "CON"), "bonus": 2 }
        ],
        "alignment": "Most dwarves are lawful.",
        "age": "Dwarves mature at the same rate as humans.",
        "size": "Medium",
        "size_description": "Dwarves stand between 4 and 5 feet tall.",
        "starting_proficiencies": [
            reference("proficiencies", "battleaxes", "Battleaxes")
        ],
        "starting_proficiency_options": {
            "desc": "Choose one tool",
            "choose": 1,
            "type": "proficiencies",
            "from": {
                "option_set_type": "options_array",
                "options": [
                    { "option_type": "reference", "item": reference("proficiencies", "smiths-tools", "Smith's Tools") },
                    { "option_type": "reference", "item": reference("proficiencies", "brewers-supplies", "Brewer's Supplies") }
                ]
            }
        },
        "languages": [
            reference("languages", "common", "Common"),
            reference("languages", "dwarvish", "Dwarvish")
        ],
        "language_desc": "You can speak, read, and write Common and Dwarvish.",
        "traits": [
            reference("traits", "darkvision", "Darkvision"),
            reference("traits", "dwarven-resilience", "Dwarven Resilience")
        ],
        "subraces": [reference("subraces", "hill-dwarf", "Hill Dwarf")]
    })
}

pub fn hill_dwarf() -> Value {
    json!({
        "index": "hill-dwarf",
        "name": "Hill Dwarf",
        "url": "/api/subraces/hill-dwarf",
        "race": reference("races", "dwarf", "Dwarf"),
        "desc": "As a hill dwarf, you have keen senses.",
        "ability_bonuses": [
            { "ability_score": reference("ability-scores", "wis", "WIS"), "bonus": 1 }
        ],
        "racial_traits": [reference("traits", "dwarven-toughness", "Dwarven Toughness")]
    })
}

pub fn darkvision() -> Value {
    json!({
        "index": "darkvision",
        "name": "Darkvision",
        "url": "/api/traits/darkvision",
        "races": [reference("races", "dwarf", "Dwarf")],
        "subraces": [],
        "desc": ["You can see in dim light within 60 feet of you as if it were bright light."],
        "proficiencies": []
    })
}

pub fn dwarven_resilience() -> Value {
    json!({
        "index": "dwarven-resilience",
        "name": "Dwarven Resilience",
        "url": "/api/traits/dwarven-resilience",
        "races": [reference("races", "dwarf", "Dwarf")],
        "desc": ["You have advantage on saving throws against poison."]
    })
}

pub fn dwarven_toughness() -> Value {
    json!({
        "index": "dwarven-toughness",
        "name": "Dwarven Toughness",
        "url": "/api/traits/dwarven-toughness",
        "subraces": [reference("subraces", "hill-dwarf", "Hill Dwarf")],
        "desc": ["Your hit point maximum increases by 1."]
    })
}

pub fn wizard() -> Value {
    json!({
        "index": "wizard",
        "name": "Wizard",
        "url": "/api/classes/wizard",
        "hit_die": 6,
        "proficiency_choices": [{
            "desc": "Choose two from Arcana, History",
            "choose": 2,
            "type": "proficiencies",
            "from": {
                "option_set_type": "options_array",
                "options": [
                    { "option_type": "reference", "item": reference("proficiencies", "skill-arcana", "Skill: Arcana") },
                    { "option_type": "reference", "item": reference("proficiencies", "skill-history", "Skill: History") }
                ]
            }
        }],
        "proficiencies": [reference("proficiencies", "daggers", "Daggers")],
        "saving_throws": [
            reference("ability-scores", "int", "INT"),
            reference("ability-scores", "wis", "WIS")
        ],
        "starting_equipment": [
            { "equipment": reference("equipment", "spellbook", "Spellbook"), "quantity": 1 }
        ],
        "starting_equipment_options": [{
            "choose": 1,
            "type": "equipment",
            "from": {
                "option_set_type": "equipment_category",
                "equipment_category": reference("equipment-categories", "arcane-foci", "Arcane Foci")
            }
        }],
        "class_levels": "/api/classes/wizard/levels",
        "subclasses": [reference("subclasses", "evocation", "Evocation")],
        "spellcasting": {
            "level": 1,
            "spellcasting_ability": reference("ability-scores", "int", "INT"),
            "info": [{ "name": "Cantrips", "desc": ["At 1st level, you know three cantrips."] }]
        }
    })
}

pub fn wizard_level(level: u8) -> Value {
    let features = match level {
        1 => vec![
            reference("features", "arcane-recovery", "Arcane Recovery"),
            reference("features", "spellcasting-wizard", "Spellcasting: Wizard"),
        ],
        _ => vec![],
    };
    json!({
        "level": level,
        "ability_score_bonuses": 0,
        "prof_bonus": 2,
        "features": features,
        "spellcasting": {
            "cantrips_known": 3,
            "spell_slots_level_1": if level == 1 { 2 } else { 3 },
            "spell_slots_level_2": 0
        },
        "index": format!("wizard-{}", level),
        "class": reference("classes", "wizard", "Wizard"),
        "url": format!("/api/classes/wizard/levels/{}", level)
    })
}

pub fn arcane_recovery() -> Value {
    json!({
        "index": "arcane-recovery",
        "name": "Arcane Recovery",
        "url": "/api/features/arcane-recovery",
        "class": reference("classes", "wizard", "Wizard"),
        "level": 1,
        "desc": ["You have learned to regain some of your magical energy."]
    })
}

pub fn spellcasting_wizard() -> Value {
    json!({
        "index": "spellcasting-wizard",
        "name": "Spellcasting: Wizard",
        "url": "/api/features/spellcasting-wizard",
        "class": reference("classes", "wizard", "Wizard"),
        "level": 1,
        "desc": ["As a student of arcane magic, you have a spellbook."]
    })
}

pub fn evocation() -> Value {
    json!({
        "index": "evocation",
        "name": "Evocation",
        "url": "/api/subclasses/evocation",
        "class": reference("classes", "wizard", "Wizard"),
        "subclass_flavor": "Arcane Tradition",
        "desc": ["You focus your study on magic that creates powerful elemental effects."],
        "subclass_levels": "/api/subclasses/evocation/levels",
        "spells": []
    })
}

pub fn evocation_levels() -> Value {
    json!([
        {
            "level": 2,
            "features": [reference("features", "evocation-savant", "Evocation Savant")],
            "class": reference("classes", "wizard", "Wizard"),
            "subclass": reference("subclasses", "evocation", "Evocation"),
            "url": "/api/subclasses/evocation/levels/2",
            "index": "evocation-2"
        },
        {
            "level": 6,
            "features": [reference("features", "potent-cantrip", "Potent Cantrip")],
            "class": reference("classes", "wizard", "Wizard"),
            "subclass": reference("subclasses", "evocation", "Evocation"),
            "url": "/api/subclasses/evocation/levels/6",
            "index": "evocation-6"
        }
    ])
}

pub fn evocation_feature(index: &str, name: &str, level: u8, desc: &str) -> Value {
    json!({
        "index": index,
        "name": name,
        "url": format!("/api/features/{}", index),
        "class": reference("classes", "wizard", "Wizard"),
        "subclass": reference("subclasses", "evocation", "Evocation"),
        "level": level,
        "desc": [desc]
    })
}

pub fn fireball() -> Value {
    json!({
        "index": "fireball",
        "name": "Fireball",
        "url": "/api/spells/fireball",
        "desc": ["A bright streak flashes from your pointing finger.", "Each creature in a 20-foot-radius sphere must make a Dexterity saving throw."],
        "higher_level": ["The damage increases by 1d6 for each slot level above 3rd."],
        "range": "150 feet",
        "components": ["V", "S", "M"],
        "material": "A tiny ball of bat guano and sulfur.",
        "ritual": false,
        "duration": "Instantaneous",
        "concentration": false,
        "casting_time": "1 action",
        "level": 3,
        "damage": {
            "damage_type": reference("damage-types", "fire", "Fire"),
            "damage_at_slot_level": { "3": "8d6", "4": "9d6" }
        },
        "dc": {
            "dc_type": reference("ability-scores", "dex", "DEX"),
            "dc_success": "half"
        },
        "area_of_effect": { "type": "sphere", "size": 20 },
        "school": reference("magic-schools", "evocation", "Evocation"),
        "classes": [reference("classes", "wizard", "Wizard")],
        "subclasses": [reference("subclasses", "lore", "Lore")]
    })
}

pub fn longsword() -> Value {
    json!({
        "index": "longsword",
        "name": "Longsword",
        "url": "/api/equipment/longsword",
        "equipment_category": reference("equipment-categories", "weapon", "Weapon"),
        "weapon_category": "Martial",
        "weapon_range": "Melee",
        "cost": { "quantity": 15, "unit": "gp" },
        "damage": { "damage_dice": "1d8", "damage_type": reference("damage-types", "slashing", "Slashing") },
        "two_handed_damage": { "damage_dice": "1d10", "damage_type": reference("damage-types", "slashing", "Slashing") },
        "range": { "normal": 5 },
        "weight": 3,
        "properties": [reference("weapon-properties", "versatile", "Versatile")]
    })
}

pub fn chain_mail() -> Value {
    json!({
        "index": "chain-mail",
        "name": "Chain Mail",
        "url": "/api/equipment/chain-mail",
        "equipment_category": reference("equipment-categories", "armor", "Armor"),
        "armor_category": "Heavy",
        "armor_class": { "base": 16, "dex_bonus": false, "max_bonus": null },
        "str_minimum": 13,
        "stealth_disadvantage": true,
        "weight": 55,
        "cost": { "quantity": 75, "unit": "gp" }
    })
}
