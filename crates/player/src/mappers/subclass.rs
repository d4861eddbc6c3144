use charbldr_domain::{BaseResource, Subclass, SubclassFeature};
use charbldr_shared::dto::SubclassDto;
use charbldr_shared::records::{SubclassFeatureRecord, SubclassRecord};

use super::common::{
    base_from_record, base_resource, bases_from_records, homebrew_base, join_paragraphs,
    record_ref, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Subclass, SubclassDto, SubclassRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

pub fn from_api(dto: SubclassDto) -> Subclass {
    Subclass {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        class: base_resource(dto.class),
        subclass_flavor: dto.subclass_flavor,
        description: join_paragraphs(dto.desc),
        spells: dto
            .spells
            .into_iter()
            .map(|prerequisite| base_resource(prerequisite.spell))
            .collect(),
        features: Vec::new(),
    }
}

pub fn from_storage(record: SubclassRecord) -> Subclass {
    Subclass {
        base: homebrew_base(record.index, record.name, record.url),
        class: base_from_record(record.class),
        subclass_flavor: record.subclass_flavor,
        description: record.description,
        spells: bases_from_records(record.spells),
        features: record
            .features
            .into_iter()
            .map(|feature| SubclassFeature {
                level: feature.level,
                name: feature.name,
                description: feature.description,
            })
            .collect(),
    }
}

pub fn to_storage(subclass: &Subclass) -> SubclassRecord {
    SubclassRecord {
        index: subclass.base.index.clone(),
        name: subclass.base.name.clone(),
        url: subclass.base.url.clone(),
        class: record_ref(&subclass.class),
        subclass_flavor: subclass.subclass_flavor.clone(),
        description: subclass.description.clone(),
        spells: record_refs(&subclass.spells),
        features: subclass
            .features
            .iter()
            .map(|feature| SubclassFeatureRecord {
                level: feature.level,
                name: feature.name.clone(),
                description: feature.description.clone(),
            })
            .collect(),
    }
}
