use charbldr_domain::{BaseResource, Race};
use charbldr_shared::dto::RaceDto;
use charbldr_shared::records::RaceRecord;

use super::common::{
    ability_bonus, ability_bonus_from_record, ability_bonus_to_record, base_resources,
    bases_from_records, choice, choice_from_record, choice_to_record, homebrew_base,
    named_description_from_record, named_description_to_record, record_refs,
};
use super::MapperTriad;

pub fn triad() -> MapperTriad<Race, RaceDto, RaceRecord> {
    MapperTriad::new(from_api, from_storage, to_storage)
}

/// `trait_details` is left empty; the race repository hydrates it.
pub fn from_api(dto: RaceDto) -> Race {
    Race {
        base: BaseResource::reference(dto.index, dto.name, dto.url),
        speed: dto.speed,
        ability_bonuses: dto.ability_bonuses.into_iter().map(ability_bonus).collect(),
        ability_bonus_options: dto.ability_bonus_options.map(choice),
        alignment: dto.alignment,
        age: dto.age,
        size: dto.size,
        size_description: dto.size_description,
        starting_proficiencies: base_resources(dto.starting_proficiencies),
        starting_proficiency_options: dto.starting_proficiency_options.map(choice),
        languages: base_resources(dto.languages),
        language_options: dto.language_options.map(choice),
        language_desc: dto.language_desc,
        traits: base_resources(dto.traits),
        subraces: base_resources(dto.subraces),
        trait_details: Vec::new(),
    }
}

pub fn from_storage(record: RaceRecord) -> Race {
    Race {
        base: homebrew_base(record.index, record.name, record.url),
        speed: record.speed,
        ability_bonuses: record
            .ability_bonuses
            .into_iter()
            .map(ability_bonus_from_record)
            .collect(),
        ability_bonus_options: record.ability_bonus_options.map(choice_from_record),
        alignment: record.alignment,
        age: record.age,
        size: record.size,
        size_description: record.size_description,
        starting_proficiencies: bases_from_records(record.starting_proficiencies),
        starting_proficiency_options: record.starting_proficiency_options.map(choice_from_record),
        languages: bases_from_records(record.languages),
        language_options: record.language_options.map(choice_from_record),
        language_desc: record.language_desc,
        traits: bases_from_records(record.traits),
        subraces: bases_from_records(record.subraces),
        trait_details: record
            .trait_details
            .into_iter()
            .map(named_description_from_record)
            .collect(),
    }
}

pub fn to_storage(race: &Race) -> RaceRecord {
    RaceRecord {
        index: race.base.index.clone(),
        name: race.base.name.clone(),
        url: race.base.url.clone(),
        speed: race.speed,
        ability_bonuses: race.ability_bonuses.iter().map(ability_bonus_to_record).collect(),
        ability_bonus_options: race.ability_bonus_options.as_ref().map(choice_to_record),
        alignment: race.alignment.clone(),
        age: race.age.clone(),
        size: race.size.clone(),
        size_description: race.size_description.clone(),
        starting_proficiencies: record_refs(&race.starting_proficiencies),
        starting_proficiency_options: race.starting_proficiency_options.as_ref().map(choice_to_record),
        languages: record_refs(&race.languages),
        language_options: race.language_options.as_ref().map(choice_to_record),
        language_desc: race.language_desc.clone(),
        traits: record_refs(&race.traits),
        subraces: record_refs(&race.subraces),
        trait_details: race
            .trait_details
            .iter()
            .map(named_description_to_record)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::fixtures;
    use charbldr_domain::{ChoiceOptions, NamedDescription, Resource};

    fn dwarf() -> Race {
        from_api(serde_json::from_value(fixtures::dwarf()).expect("dto"))
    }

    #[test]
    fn maps_reference_race() {
        let race = dwarf();

        assert_eq!(race.index(), "dwarf");
        assert!(!race.is_homebrew());
        assert_eq!(race.speed, 25);
        assert_eq!(race.ability_bonuses[0].ability_score.index, "con");
        assert_eq!(race.ability_bonuses[0].bonus, 2);
        assert_eq!(
            race.languages.iter().map(|l| l.index.as_str()).collect::<Vec<_>>(),
            vec!["common", "dwarvish"]
        );
        let options = race.starting_proficiency_options.as_ref().expect("options");
        assert!(matches!(&options.from, ChoiceOptions::Options { options } if options.len() == 2));
        assert_eq!(race.ability_bonus_options, None);
        assert!(race.trait_details.is_empty());
    }

    #[test]
    fn absent_optionals_and_lists_map_to_none_and_empty() {
        let race = from_api(
            serde_json::from_value(serde_json::json!({ "index": "x", "name": "X" })).expect("dto"),
        );
        assert_eq!(race.alignment, None);
        assert!(race.traits.is_empty());
        assert!(race.subraces.is_empty());
    }

    #[test]
    fn storage_round_trip_keeps_identity_and_details() {
        let mut race = dwarf();
        race.base = BaseResource::homebrew(
            "a1b2c3d4-0000-4000-8000-000000000001",
            "Deep Dwarf",
            "",
        );
        race.trait_details = vec![NamedDescription::new("Stonecunning", "You know stone.")];

        let restored = from_storage(to_storage(&race));

        assert_eq!(restored.index(), race.index());
        assert_eq!(restored.name(), race.name());
        assert!(restored.is_homebrew());
        assert_eq!(restored, race);
    }
}
