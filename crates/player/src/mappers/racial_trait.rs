use charbldr_domain::{BaseResource, Trait};
use charbldr_shared::dto::TraitDto;
use charbldr_shared::records::TraitRecord;

use super::common::{
    base_from_record, base_resource, base_resources, bases_from_records, choice,
    choice_from_record, choice_to_record, homebrew_base, join_paragraphs, record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Trait, TraitDto, TraitRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

pub fn from_api(dto: TraitDto) -> Trait {
    Trait {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        races: base_resources(dto.races),
        subraces: base_resources(dto.subraces),
        description: join_paragraphs(dto.desc),
        proficiencies: base_resources(dto.proficiencies),
        proficiency_choices: dto.proficiency_choices.map(choice),
        parent: dto.parent.map(base_resource),
    }
}

pub fn from_storage(record: TraitRecord) -> Trait {
    Trait {
        base: homebrew_base(record.index, record.name, record.url),
        races: bases_from_records(record.races),
        subraces: bases_from_records(record.subraces),
        description: record.description,
        proficiencies: bases_from_records(record.proficiencies),
        proficiency_choices: record.proficiency_choices.map(choice_from_record),
        parent: record.parent.map(base_from_record),
    }
}

pub fn to_storage(racial_trait: &Trait) -> TraitRecord {
    TraitRecord {
        index: racial_trait.base.index.clone(),
        name: racial_trait.base.name.clone(),
        url: racial_trait.base.url.clone(),
        races: record_refs(&racial_trait.races),
        subraces: record_refs(&racial_trait.subraces),
        description: racial_trait.description.clone(),
        proficiencies: record_refs(&racial_trait.proficiencies),
        proficiency_choices: racial_trait.proficiency_choices.as_ref().map(choice_to_record),
        parent: racial_trait.parent.as_ref().map(record_ref),
    }
}
