use std::collections::BTreeMap;

use charbldr_domain::{BaseResource, Spell, SpellDamage};
use charbldr_shared::dto::{SpellDamageDto, SpellDto};
use charbldr_shared::records::{SpellDamageRecord, SpellRecord};

use super::common::{
    area_of_effect, area_of_effect_from_record, area_of_effect_to_record, base_from_record,
    base_resource, base_resources, bases_from_records, difficulty_class,
    difficulty_class_from_record, difficulty_class_to_record, homebrew_base, join_optional_paragraphs,
    join_paragraphs, record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Spell, SpellDto, SpellRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

pub fn from_api(dto: SpellDto) -> Spell {
    Spell {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        description: join_paragraphs(dto.desc),
        higher_level: join_optional_paragraphs(dto.higher_level),
        range: dto.range,
        components: dto.components,
        material: dto.material,
        ritual: dto.ritual,
        duration: dto.duration,
        concentration: dto.concentration,
        casting_time: dto.casting_time,
        level: dto.level,
        attack_type: dto.attack_type,
        damage: dto.damage.map(spell_damage),
        dc: dto.dc.map(difficulty_class),
        area_of_effect: dto.area_of_effect.map(area_of_effect),
        school: base_resource(dto.school),
        classes: base_resources(dto.classes),
        subclasses: base_resources(dto.subclasses),
    }
}

fn spell_damage(dto: SpellDamageDto) -> SpellDamage {
    SpellDamage {
        damage_type: dto.damage_type.map(base_resource),
        at_slot_level: level_table(dto.damage_at_slot_level.unwrap_or_default()),
        at_character_level: level_table(dto.damage_at_character_level.unwrap_or_default()),
    }
}

/// Level-keyed tables arrive with string keys; non-numeric keys are dropped.
fn level_table(table: BTreeMap<String, String>) -> BTreeMap<u8, String> {
    table
        .into_iter()
        .filter_map(|(level, value)| level.parse().ok().map(|level| (level, value)))
        .collect()
}

fn string_keyed(table: &BTreeMap<u8, String>) -> BTreeMap<String, String> {
    table
        .iter()
        .map(|(level, value)| (level.to_string(), value.clone()))
        .collect()
}

pub fn from_storage(record: SpellRecord) -> Spell {
    Spell {
        base: homebrew_base(record.index, record.name, record.url),
        description: record.description,
        higher_level: record.higher_level,
        range: record.range,
        components: record.components,
        material: record.material,
        ritual: record.ritual,
        duration: record.duration,
        concentration: record.concentration,
        casting_time: record.casting_time,
        level: record.level,
        attack_type: record.attack_type,
        damage: record.damage.map(|damage| SpellDamage {
            damage_type: damage.damage_type.map(base_from_record),
            at_slot_level: level_table(damage.at_slot_level),
            at_character_level: level_table(damage.at_character_level),
        }),
        dc: record.dc.map(difficulty_class_from_record),
        area_of_effect: record.area_of_effect.map(area_of_effect_from_record),
        school: base_from_record(record.school),
        classes: bases_from_records(record.classes),
        subclasses: bases_from_records(record.subclasses),
    }
}

pub fn to_storage(spell: &Spell) -> SpellRecord {
    SpellRecord {
        index: spell.base.index.clone(),
        name: spell.base.name.clone(),
        url: spell.base.url.clone(),
        description: spell.description.clone(),
        higher_level: spell.higher_level.clone(),
        range: spell.range.clone(),
        components: spell.components.clone(),
        material: spell.material.clone(),
        ritual: spell.ritual,
        duration: spell.duration.clone(),
        concentration: spell.concentration,
        casting_time: spell.casting_time.clone(),
        level: spell.level,
        attack_type: spell.attack_type.clone(),
        damage: spell.damage.as_ref().map(|damage| SpellDamageRecord {
            damage_type: damage.damage_type.as_ref().map(record_ref),
            at_slot_level: string_keyed(&damage.at_slot_level),
            at_character_level: string_keyed(&damage.at_character_level),
        }),
        dc: spell.dc.as_ref().map(difficulty_class_to_record),
        area_of_effect: spell.area_of_effect.as_ref().map(area_of_effect_to_record),
        school: record_ref(&spell.school),
        classes: record_refs(&spell.classes),
        subclasses: record_refs(&spell.subclasses),
    }
}
