use charbldr_domain::{BaseResource, Subrace};
use charbldr_shared::dto::SubraceDto;
use charbldr_shared::records::SubraceRecord;

use super::common::{
    ability_bonus, ability_bonus_from_record, ability_bonus_to_record, base_from_record,
    base_resource, base_resources, bases_from_records, choice, choice_from_record,
    choice_to_record, homebrew_base, named_description_from_record, named_description_to_record,
    record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Subrace, SubraceDto, SubraceRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

pub fn from_api(dto: SubraceDto) -> Subrace {
    Subrace {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        race: base_resource(dto.race),
        description: dto.desc,
        ability_bonuses: dto.ability_bonuses.into_iter().map(ability_bonus).collect(),
        starting_proficiencies: base_resources(dto.starting_proficiencies),
        languages: base_resources(dto.languages),
        language_options: dto.language_options.map(choice),
        racial_traits: base_resources(dto.racial_traits),
        trait_details: Vec::new(),
    }
}

pub fn from_storage(record: SubraceRecord) -> Subrace {
    Subrace {
        base: homebrew_base(record.index, record.name, record.url),
        race: base_from_record(record.race),
        description: record.description,
        ability_bonuses: record
            .ability_bonuses
            .into_iter()
            .map(ability_bonus_from_record)
            .collect(),
        starting_proficiencies: bases_from_records(record.starting_proficiencies),
        languages: bases_from_records(record.languages),
        language_options: record.language_options.map(choice_from_record),
        racial_traits: bases_from_records(record.racial_traits),
        trait_details: record
            .trait_details
            .into_iter()
            .map(named_description_from_record)
            .collect(),
    }
}

pub fn to_storage(subrace: &Subrace) -> SubraceRecord {
    SubraceRecord {
        index: subrace.base.index.clone(),
        name: subrace.base.name.clone(),
        url: subrace.base.url.clone(),
        race: record_ref(&subrace.race),
        description: subrace.description.clone(),
        ability_bonuses: subrace
            .ability_bonuses
            .iter()
            .map(ability_bonus_to_record)
            .collect(),
        starting_proficiencies: record_refs(&subrace.starting_proficiencies),
        languages: record_refs(&subrace.languages),
        language_options: subrace.language_options.as_ref().map(choice_to_record),
        racial_traits: record_refs(&subrace.racial_traits),
        trait_details: subrace
            .trait_details
            .iter()
            .map(named_description_to_record)
            .collect(),
    }
}
