//! Mappers for nested structures shared by several resource kinds.

use charbldr_domain::common::some_if_not_empty;
use charbldr_domain::{
    is_homebrew_index, AbilityBonus, AreaOfEffect, BaseResource, Choice, ChoiceOption,
    ChoiceOptions, Cost, Damage, DifficultyClass, NamedDescription,
};
use charbldr_shared::dto::{
    AbilityBonusDto, ApiReference, AreaOfEffectDto, ChoiceDto, CostDto, DamageDto, DcDto,
    OptionDto, OptionSetDto,
};
use charbldr_shared::records::{
    AbilityBonusRecord, AreaOfEffectRecord, ChoiceOptionRecord, ChoiceOptionsRecord,
    ChoiceRecord, CostRecord, DamageRecord, DcRecord, NamedDescriptionRecord, RecordRef,
};

/// Paragraph separator used when flattening the API's `desc` arrays.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

pub fn join_paragraphs(paragraphs: Vec<String>) -> String {
    paragraphs.join(PARAGRAPH_SEPARATOR)
}

/// `None` when there is no text at all.
pub fn join_optional_paragraphs(paragraphs: Vec<String>) -> Option<String> {
    some_if_not_empty(join_paragraphs(paragraphs))
}

// =============================================================================
// Wire DTO -> domain
// =============================================================================

pub fn base_resource(reference: ApiReference) -> BaseResource {
    BaseResource::reference(reference.index, reference.name, reference.url)
}

pub fn base_resources(references: Vec<ApiReference>) -> Vec<BaseResource> {
    references.into_iter().map(base_resource).collect()
}

pub fn ability_bonus(dto: AbilityBonusDto) -> AbilityBonus {
    AbilityBonus {
        ability_score: base_resource(dto.ability_score),
        bonus: dto.bonus,
    }
}

pub fn choice(dto: ChoiceDto) -> Choice {
    Choice {
        description: dto.desc,
        choose: dto.choose,
        choice_type: dto.choice_type,
        from: choice_options(dto.from),
    }
}

pub fn choices(dtos: Vec<ChoiceDto>) -> Vec<Choice> {
    dtos.into_iter().map(choice).collect()
}

fn choice_options(dto: OptionSetDto) -> ChoiceOptions {
    match dto {
        OptionSetDto::OptionsArray { options } => ChoiceOptions::Options {
            options: options.into_iter().filter_map(choice_option).collect(),
        },
        OptionSetDto::EquipmentCategory { equipment_category } => {
            ChoiceOptions::EquipmentCategory {
                category: base_resource(equipment_category),
            }
        }
        OptionSetDto::ResourceList { resource_list_url } => ChoiceOptions::ResourceList {
            url: resource_list_url,
        },
    }
}

/// Unsupported option kinds are dropped.
fn choice_option(dto: OptionDto) -> Option<ChoiceOption> {
    let option = match dto {
        OptionDto::Reference { item } => ChoiceOption::Reference {
            item: base_resource(item),
        },
        OptionDto::CountedReference { count, of } => ChoiceOption::CountedReference {
            count,
            of: base_resource(of),
        },
        OptionDto::AbilityBonus {
            ability_score,
            bonus,
        } => ChoiceOption::AbilityBonus {
            bonus: AbilityBonus {
                ability_score: base_resource(ability_score),
                bonus,
            },
        },
        OptionDto::String { string } => ChoiceOption::Text { text: string },
        OptionDto::Choice { choice: nested } => ChoiceOption::Choice {
            choice: Box::new(choice(nested)),
        },
        OptionDto::Multiple { items } => ChoiceOption::Multiple {
            items: items.into_iter().filter_map(choice_option).collect(),
        },
        OptionDto::Unsupported => return None,
    };
    Some(option)
}

pub fn cost(dto: CostDto) -> Cost {
    Cost {
        quantity: dto.quantity,
        unit: dto.unit,
    }
}

pub fn damage(dto: DamageDto) -> Damage {
    Damage {
        damage_type: dto.damage_type.map(base_resource),
        damage_dice: dto.damage_dice,
    }
}

pub fn difficulty_class(dto: DcDto) -> DifficultyClass {
    DifficultyClass {
        dc_type: base_resource(dto.dc_type),
        dc_value: dto.dc_value,
        success_type: dto.success_type,
    }
}

pub fn area_of_effect(dto: AreaOfEffectDto) -> AreaOfEffect {
    AreaOfEffect {
        shape: dto.shape,
        size: dto.size,
    }
}

// =============================================================================
// Storage record <-> domain
// =============================================================================

/// Root identity of a homebrew entity.
pub fn homebrew_base(index: String, name: String, url: String) -> BaseResource {
    BaseResource::homebrew(index, name, url)
}

/// Stored cross-references may point at reference or homebrew entities; the
/// shape of the index tells which.
pub fn base_from_record(record: RecordRef) -> BaseResource {
    let is_homebrew = is_homebrew_index(&record.index);
    BaseResource {
        index: record.index,
        name: record.name,
        url: record.url,
        is_homebrew,
    }
}

pub fn bases_from_records(records: Vec<RecordRef>) -> Vec<BaseResource> {
    records.into_iter().map(base_from_record).collect()
}

pub fn record_ref(base: &BaseResource) -> RecordRef {
    RecordRef {
        index: base.index.clone(),
        name: base.name.clone(),
        url: base.url.clone(),
    }
}

pub fn record_refs(bases: &[BaseResource]) -> Vec<RecordRef> {
    bases.iter().map(record_ref).collect()
}

pub fn ability_bonus_from_record(record: AbilityBonusRecord) -> AbilityBonus {
    AbilityBonus {
        ability_score: base_from_record(record.ability_score),
        bonus: record.bonus,
    }
}

pub fn ability_bonus_to_record(bonus: &AbilityBonus) -> AbilityBonusRecord {
    AbilityBonusRecord {
        ability_score: record_ref(&bonus.ability_score),
        bonus: bonus.bonus,
    }
}

pub fn choice_from_record(record: ChoiceRecord) -> Choice {
    Choice {
        description: record.desc,
        choose: record.choose,
        choice_type: record.choice_type,
        from: match record.from {
            ChoiceOptionsRecord::Options { options } => ChoiceOptions::Options {
                options: options.into_iter().map(choice_option_from_record).collect(),
            },
            ChoiceOptionsRecord::EquipmentCategory { category } => {
                ChoiceOptions::EquipmentCategory {
                    category: base_from_record(category),
                }
            }
            ChoiceOptionsRecord::ResourceList { url } => ChoiceOptions::ResourceList { url },
        },
    }
}

pub fn choices_from_records(records: Vec<ChoiceRecord>) -> Vec<Choice> {
    records.into_iter().map(choice_from_record).collect()
}

fn choice_option_from_record(record: ChoiceOptionRecord) -> ChoiceOption {
    match record {
        ChoiceOptionRecord::Reference { item } => ChoiceOption::Reference {
            item: base_from_record(item),
        },
        ChoiceOptionRecord::CountedReference { count, of } => ChoiceOption::CountedReference {
            count,
            of: base_from_record(of),
        },
        ChoiceOptionRecord::AbilityBonus {
            ability_score,
            bonus,
        } => ChoiceOption::AbilityBonus {
            bonus: AbilityBonus {
                ability_score: base_from_record(ability_score),
                bonus,
            },
        },
        ChoiceOptionRecord::Text { text } => ChoiceOption::Text { text },
        ChoiceOptionRecord::Choice { choice } => ChoiceOption::Choice {
            choice: Box::new(choice_from_record(*choice)),
        },
        ChoiceOptionRecord::Multiple { items } => ChoiceOption::Multiple {
            items: items.into_iter().map(choice_option_from_record).collect(),
        },
    }
}

pub fn choice_to_record(choice: &Choice) -> ChoiceRecord {
    ChoiceRecord {
        desc: choice.description.clone(),
        choose: choice.choose,
        choice_type: choice.choice_type.clone(),
        from: match &choice.from {
            ChoiceOptions::Options { options } => ChoiceOptionsRecord::Options {
                options: options.iter().map(choice_option_to_record).collect(),
            },
            ChoiceOptions::EquipmentCategory { category } => {
                ChoiceOptionsRecord::EquipmentCategory {
                    category: record_ref(category),
                }
            }
            ChoiceOptions::ResourceList { url } => {
                ChoiceOptionsRecord::ResourceList { url: url.clone() }
            }
        },
    }
}

pub fn choices_to_records(choices: &[Choice]) -> Vec<ChoiceRecord> {
    choices.iter().map(choice_to_record).collect()
}

fn choice_option_to_record(option: &ChoiceOption) -> ChoiceOptionRecord {
    match option {
        ChoiceOption::Reference { item } => ChoiceOptionRecord::Reference {
            item: record_ref(item),
        },
        ChoiceOption::CountedReference { count, of } => ChoiceOptionRecord::CountedReference {
            count: *count,
            of: record_ref(of),
        },
        ChoiceOption::AbilityBonus { bonus } => ChoiceOptionRecord::AbilityBonus {
            ability_score: record_ref(&bonus.ability_score),
            bonus: bonus.bonus,
        },
        ChoiceOption::Text { text } => ChoiceOptionRecord::Text { text: text.clone() },
        ChoiceOption::Choice { choice } => ChoiceOptionRecord::Choice {
            choice: Box::new(choice_to_record(choice)),
        },
        ChoiceOption::Multiple { items } => ChoiceOptionRecord::Multiple {
            items: items.iter().map(choice_option_to_record).collect(),
        },
    }
}

pub fn named_description_from_record(record: NamedDescriptionRecord) -> NamedDescription {
    NamedDescription::new(record.name, record.description)
}

pub fn named_description_to_record(named: &NamedDescription) -> NamedDescriptionRecord {
    NamedDescriptionRecord {
        name: named.name.clone(),
        description: named.description.clone(),
    }
}

pub fn cost_from_record(record: CostRecord) -> Cost {
    Cost {
        quantity: record.quantity,
        unit: record.unit,
    }
}

pub fn cost_to_record(cost: &Cost) -> CostRecord {
    CostRecord {
        quantity: cost.quantity,
        unit: cost.unit.clone(),
    }
}

pub fn damage_from_record(record: DamageRecord) -> Damage {
    Damage {
        damage_type: record.damage_type.map(base_from_record),
        damage_dice: record.damage_dice,
    }
}

pub fn damage_to_record(damage: &Damage) -> DamageRecord {
    DamageRecord {
        damage_type: damage.damage_type.as_ref().map(record_ref),
        damage_dice: damage.damage_dice.clone(),
    }
}

pub fn difficulty_class_from_record(record: DcRecord) -> DifficultyClass {
    DifficultyClass {
        dc_type: base_from_record(record.dc_type),
        dc_value: record.dc_value,
        success_type: record.success_type,
    }
}

pub fn difficulty_class_to_record(dc: &DifficultyClass) -> DcRecord {
    DcRecord {
        dc_type: record_ref(&dc.dc_type),
        dc_value: dc.dc_value,
        success_type: dc.success_type.clone(),
    }
}

pub fn area_of_effect_from_record(record: AreaOfEffectRecord) -> AreaOfEffect {
    AreaOfEffect {
        shape: record.shape,
        size: record.size,
    }
}

pub fn area_of_effect_to_record(area: &AreaOfEffect) -> AreaOfEffectRecord {
    AreaOfEffectRecord {
        shape: area.shape.clone(),
        size: area.size,
    }
}
