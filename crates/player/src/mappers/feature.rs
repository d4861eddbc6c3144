use charbldr_domain::{BaseResource, Feature};
use charbldr_shared::dto::FeatureDto;
use charbldr_shared::records::FeatureRecord;

use super::common::{
    base_from_record, base_resource, homebrew_base, join_paragraphs, record_ref,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Feature, FeatureDto, FeatureRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

pub fn from_api(dto: FeatureDto) -> Feature {
    Feature {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        class: base_resource(dto.class),
        subclass: dto.subclass.map(base_resource),
        level: dto.level,
        description: join_paragraphs(dto.desc),
        parent: dto.parent.map(base_resource),
    }
}

pub fn from_storage(record: FeatureRecord) -> Feature {
    Feature {
        base: homebrew_base(record.index, record.name, record.url),
        class: base_from_record(record.class),
        subclass: record.subclass.map(base_from_record),
        level: record.level,
        description: record.description,
        parent: record.parent.map(base_from_record),
    }
}

pub fn to_storage(feature: &Feature) -> FeatureRecord {
    FeatureRecord {
        index: feature.base.index.clone(),
        name: feature.base.name.clone(),
        url: feature.base.url.clone(),
        class: record_ref(&feature.class),
        subclass: feature.subclass.as_ref().map(record_ref),
        level: feature.level,
        description: feature.description.clone(),
        parent: feature.parent.as_ref().map(record_ref),
    }
}
