use charbldr_domain::{ArmorStats, BaseResource, Equipment, WeaponStats};
use charbldr_shared::dto::EquipmentDto;
use charbldr_shared::records::{ArmorRecord, EquipmentRecord, WeaponRecord};

use super::common::{
    base_from_record, base_resource, base_resources, bases_from_records, cost, cost_from_record,
    cost_to_record, damage, damage_from_record, damage_to_record, homebrew_base, join_paragraphs,
    record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Equipment, EquipmentDto, EquipmentRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

/// Weapon and armor stats are only set when the DTO carries the matching
/// category.
pub fn from_api(dto: EquipmentDto) -> Equipment {
    let weapon = match dto.weapon_category {
        Some(category) => Some(WeaponStats {
            category,
            range_kind: dto.weapon_range.unwrap_or_default(),
            damage: dto.damage.map(damage),
            two_handed_damage: dto.two_handed_damage.map(damage),
            normal_range: dto.range.as_ref().and_then(|range| range.normal),
            long_range: dto.range.as_ref().and_then(|range| range.long),
            properties: base_resources(dto.properties),
        }),
        None => None,
    };

    let armor = match (dto.armor_category, dto.armor_class) {
        (Some(category), Some(armor_class)) => Some(ArmorStats {
            category,
            base_ac: armor_class.base,
            dex_bonus: armor_class.dex_bonus,
            max_bonus: armor_class.max_bonus,
            str_minimum: dto.str_minimum.unwrap_or(0),
            stealth_disadvantage: dto.stealth_disadvantage.unwrap_or(false),
        }),
        _ => None,
    };

    Equipment {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        equipment_category: base_resource(dto.equipment_category),
        cost: cost(dto.cost),
        weight: dto.weight,
        description: join_paragraphs(dto.desc),
        weapon,
        armor,
        gear_category: dto.gear_category.map(base_resource),
        quantity: dto.quantity,
    }
}

pub fn from_storage(record: EquipmentRecord) -> Equipment {
    Equipment {
        base: homebrew_base(record.index, record.name, record.url),
        equipment_category: base_from_record(record.equipment_category),
        cost: cost_from_record(record.cost),
        weight: record.weight,
        description: record.description,
        weapon: record.weapon.map(|weapon| WeaponStats {
            category: weapon.category,
            range_kind: weapon.range_kind,
            damage: weapon.damage.map(damage_from_record),
            two_handed_damage: weapon.two_handed_damage.map(damage_from_record),
            normal_range: weapon.normal_range,
            long_range: weapon.long_range,
            properties: bases_from_records(weapon.properties),
        }),
        armor: record.armor.map(|armor| ArmorStats {
            category: armor.category,
            base_ac: armor.base_ac,
            dex_bonus: armor.dex_bonus,
            max_bonus: armor.max_bonus,
            str_minimum: armor.str_minimum,
            stealth_disadvantage: armor.stealth_disadvantage,
        }),
        gear_category: record.gear_category.map(base_from_record),
        quantity: record.quantity,
    }
}

pub fn to_storage(equipment: &Equipment) -> EquipmentRecord {
    EquipmentRecord {
        index: equipment.base.index.clone(),
        name: equipment.base.name.clone(),
        url: equipment.base.url.clone(),
        equipment_category: record_ref(&equipment.equipment_category),
        cost: cost_to_record(&equipment.cost),
        weight: equipment.weight,
        description: equipment.description.clone(),
        weapon: equipment.weapon.as_ref().map(|weapon| WeaponRecord {
            category: weapon.category.clone(),
            range_kind: weapon.range_kind.clone(),
            damage: weapon.damage.as_ref().map(damage_to_record),
            two_handed_damage: weapon.two_handed_damage.as_ref().map(damage_to_record),
            normal_range: weapon.normal_range,
            long_range: weapon.long_range,
            properties: record_refs(&weapon.properties),
        }),
        armor: equipment.armor.as_ref().map(|armor| ArmorRecord {
            category: armor.category.clone(),
            base_ac: armor.base_ac,
            dex_bonus: armor.dex_bonus,
            max_bonus: armor.max_bonus,
            str_minimum: armor.str_minimum,
            stealth_disadvantage: armor.stealth_disadvantage,
        }),
        gear_category: equipment.gear_category.as_ref().map(record_ref),
        quantity: equipment.quantity,
    }
}
