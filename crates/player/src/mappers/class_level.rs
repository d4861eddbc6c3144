use charbldr_domain::{BaseResource, ClassLevel, LevelSpellcasting};
use charbldr_shared::dto::{ClassLevelDto, LevelSpellcastingDto};
use charbldr_shared::records::{ClassLevelRecord, LevelSpellcastingRecord};

use super::common::{
    base_from_record, base_resource, base_resources, bases_from_records, homebrew_base,
    named_description_from_record, named_description_to_record, record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<ClassLevel, ClassLevelDto, ClassLevelRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

/// Level rows carry no name of their own; one is derived from the level.
/// `feature_details` is left empty for the repository to hydrate.
pub fn from_api(dto: ClassLevelDto) -> ClassLevel {
    ClassLevel {
        base: BaseResource::reference(dto.index, level_name(dto.level), dto.url),
        level: dto.level,
        class: base_resource(dto.class),
        subclass: dto.subclass.map(base_resource),
        ability_score_bonuses: dto.ability_score_bonuses,
        proficiency_bonus: dto.prof_bonus,
        features: base_resources(dto.features),
        feature_details: Vec::new(),
        spellcasting: dto.spellcasting.as_ref().map(level_spellcasting),
    }
}

pub fn level_name(level: u8) -> String {
    format!("Level {}", level)
}

/// Slot columns are kept up to the highest one the API reports; gaps below it
/// count as zero slots.
fn level_spellcasting(dto: &LevelSpellcastingDto) -> LevelSpellcasting {
    let slots = dto.spell_slots();
    let reported = slots
        .iter()
        .rposition(Option::is_some)
        .map_or(0, |last| last + 1);

    LevelSpellcasting {
        cantrips_known: dto.cantrips_known,
        spells_known: dto.spells_known,
        spell_slots: slots[..reported]
            .iter()
            .map(|slot| slot.unwrap_or(0))
            .collect(),
    }
}

pub fn from_storage(record: ClassLevelRecord) -> ClassLevel {
    ClassLevel {
        base: homebrew_base(record.index, record.name, record.url),
        level: record.level,
        class: base_from_record(record.class),
        subclass: record.subclass.map(base_from_record),
        ability_score_bonuses: record.ability_score_bonuses,
        proficiency_bonus: record.proficiency_bonus,
        features: bases_from_records(record.features),
        feature_details: record
            .feature_details
            .into_iter()
            .map(named_description_from_record)
            .collect(),
        spellcasting: record.spellcasting.map(|spellcasting| LevelSpellcasting {
            cantrips_known: spellcasting.cantrips_known,
            spells_known: spellcasting.spells_known,
            spell_slots: spellcasting.spell_slots,
        }),
    }
}

pub fn to_storage(level: &ClassLevel) -> ClassLevelRecord {
    ClassLevelRecord {
        index: level.base.index.clone(),
        name: level.base.name.clone(),
        url: level.base.url.clone(),
        level: level.level,
        class: record_ref(&level.class),
        subclass: level.subclass.as_ref().map(record_ref),
        ability_score_bonuses: level.ability_score_bonuses,
        proficiency_bonus: level.proficiency_bonus,
        features: record_refs(&level.features),
        feature_details: level
            .feature_details
            .iter()
            .map(named_description_to_record)
            .collect(),
        spellcasting: level
            .spellcasting
            .as_ref()
            .map(|spellcasting| LevelSpellcastingRecord {
                cantrips_known: spellcasting.cantrips_known,
                spells_known: spellcasting.spells_known,
                spell_slots: spellcasting.spell_slots.clone(),
            }),
    }
}
