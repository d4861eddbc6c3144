use charbldr_domain::{BaseResource, CharacterClass, NamedDescription, Spellcasting, StartingEquipment};
use charbldr_shared::dto::{ClassDto, SpellcastingDto};
use charbldr_shared::records::{ClassRecord, SpellcastingRecord, StartingEquipmentRecord};

use super::common::{
    base_from_record, base_resource, base_resources, bases_from_records, choices,
    choices_from_records, choices_to_records, homebrew_base, join_paragraphs,
    named_description_from_record, named_description_to_record, record_ref, record_refs,
};
use super::{class_level, MapperTriad};

pub fn triad() -> MapperTriad<CharacterClass, ClassDto, ClassRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

/// Reference classes resolve their progression through the level endpoints,
/// so `levels` starts out empty.
pub fn from_api(dto: ClassDto) -> CharacterClass {
    CharacterClass {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        hit_die: dto.hit_die,
        proficiency_choices: choices(dto.proficiency_choices),
        proficiencies: base_resources(dto.proficiencies),
        saving_throws: base_resources(dto.saving_throws),
        starting_equipment: dto
            .starting_equipment
            .into_iter()
            .map(|item| StartingEquipment {
                equipment: base_resource(item.equipment),
                quantity: item.quantity,
            })
            .collect(),
        starting_equipment_options: choices(dto.starting_equipment_options),
        subclasses: base_resources(dto.subclasses),
        spellcasting: dto.spellcasting.map(spellcasting),
        levels: Vec::new(),
    }
}

fn spellcasting(dto: SpellcastingDto) -> Spellcasting {
    Spellcasting {
        level: dto.level,
        spellcasting_ability: base_resource(dto.spellcasting_ability),
        info: dto
            .info
            .into_iter()
            .map(|info| NamedDescription::new(info.name, join_paragraphs(info.desc)))
            .collect(),
    }
}

pub fn from_storage(record: ClassRecord) -> CharacterClass {
    CharacterClass {
        base: homebrew_base(record.index, record.name, record.url),
        hit_die: record.hit_die,
        proficiency_choices: choices_from_records(record.proficiency_choices),
        proficiencies: bases_from_records(record.proficiencies),
        saving_throws: bases_from_records(record.saving_throws),
        starting_equipment: record
            .starting_equipment
            .into_iter()
            .map(|item| StartingEquipment {
                equipment: base_from_record(item.equipment),
                quantity: item.quantity,
            })
            .collect(),
        starting_equipment_options: choices_from_records(record.starting_equipment_options),
        subclasses: bases_from_records(record.subclasses),
        spellcasting: record.spellcasting.map(|spellcasting| Spellcasting {
            level: spellcasting.level,
            spellcasting_ability: base_from_record(spellcasting.spellcasting_ability),
            info: spellcasting
                .info
                .into_iter()
                .map(named_description_from_record)
                .collect(),
        }),
        levels: record
            .levels
            .into_iter()
            .map(class_level::from_storage)
            .collect(),
    }
}

pub fn to_storage(class: &CharacterClass) -> ClassRecord {
    ClassRecord {
        index: class.base.index.clone(),
        name: class.base.name.clone(),
        url: class.base.url.clone(),
        hit_die: class.hit_die,
        proficiency_choices: choices_to_records(&class.proficiency_choices),
        proficiencies: record_refs(&class.proficiencies),
        saving_throws: record_refs(&class.saving_throws),
        starting_equipment: class
            .starting_equipment
            .iter()
            .map(|item| StartingEquipmentRecord {
                equipment: record_ref(&item.equipment),
                quantity: item.quantity,
            })
            .collect(),
        starting_equipment_options: choices_to_records(&class.starting_equipment_options),
        subclasses: record_refs(&class.subclasses),
        spellcasting: class
            .spellcasting
            .as_ref()
            .map(|spellcasting| SpellcastingRecord {
                level: spellcasting.level,
                spellcasting_ability: record_ref(&spellcasting.spellcasting_ability),
                info: spellcasting
                    .info
                    .iter()
                    .map(named_description_to_record)
                    .collect(),
            }),
        levels: class.levels.iter().map(class_level::to_storage).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use charbldr_domain::{ChoiceOptions, Resource};

    fn wizard() -> CharacterClass {
        from_api(serde_json::from_value(fixtures::wizard()).expect("dto"))
    }

    #[test]
    fn maps_reference_class() {
        let class = wizard();

        assert_eq!(class.name(), "Wizard");
        assert_eq!(class.hit_die, 6);
        assert_eq!(class.proficiency_choices[0].choose, 2);
        assert!(matches!(
            class.starting_equipment_options[0].from,
            ChoiceOptions::EquipmentCategory { .. }
        ));
        assert_eq!(class.starting_equipment[0].equipment.index, "spellbook");
        let spellcasting = class.spellcasting.as_ref().expect("spellcasting");
        assert_eq!(spellcasting.spellcasting_ability.index, "int");
        assert_eq!(spellcasting.info[0].name, "Cantrips");
        assert!(class.levels.is_empty());
    }

    #[test]
    fn homebrew_class_stores_levels_inline() {
        let mut class = wizard();
        class.base = BaseResource::homebrew("a1b2c3d4-0000-4000-8000-000000000008", "Artificer", "");
        let mut level = class_level::from_api(
            serde_json::from_value(fixtures::wizard_level(1)).expect("level"),
        );
        level.base.is_homebrew = true;
        class.levels = vec![level];

        let record = to_storage(&class);
        assert_eq!(record.levels.len(), 1);

        let restored = from_storage(record);
        assert_eq!(restored, class);
        assert!(restored.is_homebrew());
    }
}
