//! Races and subraces with their trait descriptions stitched in.

use charbldr_domain::{Race, Resource, ResourceList, ResourceType, Subrace};
use charbldr_shared::dto::{RaceDto, SubraceDto};
use charbldr_shared::records::{RaceRecord, SubraceRecord};

use super::{RepositoryContext, RepositoryError, ResourceRepository, TraitRepository};
use crate::mappers;

/// Races. Reference races get `trait_details` hydrated from
/// `races/{index}/traits`; homebrew races carry them inline.
pub struct RaceRepository {
    races: ResourceRepository<Race, RaceDto, RaceRecord>,
    traits: TraitRepository,
}

impl RaceRepository {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            races: ResourceRepository::new(
                context.clone(),
                ResourceType::Races,
                mappers::race::triad(),
            ),
            traits: TraitRepository::new(context),
        }
    }

    pub async fn get(&self, index: &str) -> Result<Option<Race>, RepositoryError> {
        let Some(mut race) = self.races.get(index).await? else {
            return Ok(None);
        };

        if !race.is_homebrew() {
            race.trait_details = self.traits.remote_details("races", race.index()).await?;
        }

        Ok(Some(race))
    }

    pub async fn get_all(&self) -> Result<ResourceList, RepositoryError> {
        self.races.get_all().await
    }

    pub fn save_homebrew(&self, race: &Race) -> Result<Race, RepositoryError> {
        self.races.save_homebrew(race)
    }

    pub fn delete_homebrew(&self, index: &str) -> Result<bool, RepositoryError> {
        self.races.delete_homebrew(index)
    }
}

/// Subraces, hydrated from `subraces/{index}/traits` like races.
pub struct SubraceRepository {
    subraces: ResourceRepository<Subrace, SubraceDto, SubraceRecord>,
    traits: TraitRepository,
}

impl SubraceRepository {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            subraces: ResourceRepository::new(
                context.clone(),
                ResourceType::Subraces,
                mappers::subrace::triad(),
            ),
            traits: TraitRepository::new(context),
        }
    }

    pub async fn get(&self, index: &str) -> Result<Option<Subrace>, RepositoryError> {
        let Some(mut subrace) = self.subraces.get(index).await? else {
            return Ok(None);
        };

        if !subrace.is_homebrew() {
            subrace.trait_details = self
                .traits
                .remote_details("subraces", subrace.index())
                .await?;
        }

        Ok(Some(subrace))
    }

    pub async fn get_all(&self) -> Result<ResourceList, RepositoryError> {
        self.subraces.get_all().await
    }

    pub fn save_homebrew(&self, subrace: &Subrace) -> Result<Subrace, RepositoryError> {
        self.subraces.save_homebrew(subrace)
    }

    pub fn delete_homebrew(&self, index: &str) -> Result<bool, RepositoryError> {
        self.subraces.delete_homebrew(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, FakeTransport, TestContext};
    use charbldr_domain::{BaseResource, NamedDescription};

    const HOMEBREW_DWARF: &str = "a1b2c3d4-0000-4000-8000-000000000001";

    fn dwarf_transport() -> FakeTransport {
        FakeTransport::new()
            .with_json(&fixtures::url("races/dwarf"), fixtures::dwarf())
            .with_json(
                &fixtures::url("races/dwarf/traits"),
                fixtures::catalog(
                    "traits",
                    &[("darkvision", "Darkvision"), ("dwarven-resilience", "Dwarven Resilience")],
                ),
            )
            .with_json(&fixtures::url("traits/darkvision"), fixtures::darkvision())
            .with_json(
                &fixtures::url("traits/dwarven-resilience"),
                fixtures::dwarven_resilience(),
            )
            .with_json(
                &fixtures::url("races"),
                fixtures::catalog("races", &[("dwarf", "Dwarf"), ("elf", "Elf")]),
            )
    }

    /// A homebrew race deliberately named like the reference one.
    fn homebrew_dwarf() -> Race {
        let mut race = mappers::race::from_api(serde_json::from_value(fixtures::dwarf()).expect("dto"));
        race.base = BaseResource::homebrew(HOMEBREW_DWARF, "Dwarf", "");
        race.trait_details = vec![NamedDescription::new("Stoneborn", "You never get lost underground.")];
        race
    }

    #[tokio::test]
    async fn reference_race_gets_trait_details() {
        let test = TestContext::new(dwarf_transport());
        let repository = RaceRepository::new(test.context());

        let dwarf = repository.get("dwarf").await.expect("get").expect("found");

        assert!(!dwarf.is_homebrew());
        let names: Vec<&str> = dwarf.trait_details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Darkvision", "Dwarven Resilience"]);
        assert!(dwarf.trait_details[0].description.contains("dim light"));
    }

    #[tokio::test]
    async fn homebrew_race_keeps_inline_traits_without_network() {
        let test = TestContext::new(dwarf_transport());
        let repository = RaceRepository::new(test.context());
        repository.save_homebrew(&homebrew_dwarf()).expect("save");

        let race = repository
            .get(HOMEBREW_DWARF)
            .await
            .expect("get")
            .expect("found");

        assert!(race.is_homebrew());
        assert_eq!(race.trait_details.len(), 1);
        assert_eq!(race.trait_details[0].name, "Stoneborn");
        assert_eq!(test.transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn homebrew_and_reference_ids_never_collide() {
        let test = TestContext::new(dwarf_transport());
        let repository = RaceRepository::new(test.context());
        repository.save_homebrew(&homebrew_dwarf()).expect("save");

        let reference = repository.get("dwarf").await.expect("get").expect("found");
        let homebrew = repository
            .get(HOMEBREW_DWARF)
            .await
            .expect("get")
            .expect("found");

        assert!(!reference.is_homebrew());
        assert!(homebrew.is_homebrew());
        assert_eq!(reference.name(), homebrew.name());
        assert_eq!(test.transport.call_count(&fixtures::url("races/dwarf")), 1);

        let all = repository.get_all().await.expect("get_all");
        assert_eq!(all.count(), 3);
        assert_eq!(all.count(), all.results().len());
        let dwarves = all.results().iter().filter(|r| r.name == "Dwarf").count();
        assert_eq!(dwarves, 2);
    }

    #[tokio::test]
    async fn reference_subrace_gets_trait_details() {
        let transport = FakeTransport::new()
            .with_json(&fixtures::url("subraces/hill-dwarf"), fixtures::hill_dwarf())
            .with_json(
                &fixtures::url("subraces/hill-dwarf/traits"),
                fixtures::catalog("traits", &[("dwarven-toughness", "Dwarven Toughness")]),
            )
            .with_json(
                &fixtures::url("traits/dwarven-toughness"),
                fixtures::dwarven_toughness(),
            );
        let test = TestContext::new(transport);
        let repository = SubraceRepository::new(test.context());

        let subrace = repository
            .get("hill-dwarf")
            .await
            .expect("get")
            .expect("found");

        assert_eq!(subrace.race.index, "dwarf");
        assert_eq!(subrace.trait_details.len(), 1);
        assert_eq!(subrace.trait_details[0].name, "Dwarven Toughness");
    }

    #[tokio::test]
    async fn missing_subrace_skips_trait_lookup() {
        let test = TestContext::new(FakeTransport::new());
        let repository = SubraceRepository::new(test.context());

        assert!(repository.get("mountain-dwarf").await.expect("get").is_none());
        assert_eq!(test.transport.total_calls(), 1);
    }
}
