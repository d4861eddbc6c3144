//! Racial traits and their race/subrace relations.

use charbldr_domain::{NamedDescription, Resource, ResourceList, ResourceType, Trait};
use charbldr_shared::dto::{ResourceListDto, TraitDto};
use charbldr_shared::records::TraitRecord;

use super::{RepositoryContext, RepositoryError, ResourceRepository};
use crate::mappers;

pub struct TraitRepository {
    traits: ResourceRepository<Trait, TraitDto, TraitRecord>,
}

impl TraitRepository {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            traits: ResourceRepository::new(
                context,
                ResourceType::Traits,
                mappers::racial_trait::triad(),
            ),
        }
    }

    pub async fn get(&self, index: &str) -> Result<Option<Trait>, RepositoryError> {
        self.traits.get(index).await
    }

    pub async fn get_all(&self) -> Result<ResourceList, RepositoryError> {
        self.traits.get_all().await
    }

    pub fn save_homebrew(&self, racial_trait: &Trait) -> Result<Trait, RepositoryError> {
        self.traits.save_homebrew(racial_trait)
    }

    pub fn delete_homebrew(&self, index: &str) -> Result<bool, RepositoryError> {
        self.traits.delete_homebrew(index)
    }

    /// Traits granted by a race: homebrew traits pointing at it, plus the
    /// remote relation for reference races.
    pub async fn list_for_race(&self, race: &impl Resource) -> Result<Vec<Trait>, RepositoryError> {
        self.list_for_owner(race, "races").await
    }

    /// Traits granted by a subrace, resolved like [`Self::list_for_race`].
    pub async fn list_for_subrace(
        &self,
        subrace: &impl Resource,
    ) -> Result<Vec<Trait>, RepositoryError> {
        self.list_for_owner(subrace, "subraces").await
    }

    /// Name and description of every trait behind `{owner}/{index}/traits`.
    pub(crate) async fn remote_details(
        &self,
        owner: &str,
        index: &str,
    ) -> Result<Vec<NamedDescription>, RepositoryError> {
        Ok(self
            .resolve_relation(owner, index)
            .await?
            .into_iter()
            .map(|racial_trait| {
                NamedDescription::new(racial_trait.base.name, racial_trait.description)
            })
            .collect())
    }

    async fn list_for_owner(
        &self,
        owner: &impl Resource,
        owner_kind: &str,
    ) -> Result<Vec<Trait>, RepositoryError> {
        let mut traits: Vec<Trait> = self
            .traits
            .get_all_homebrew()
            .into_iter()
            .filter(|racial_trait| racial_trait.belongs_to(owner.index()))
            .collect();

        if !owner.is_homebrew() {
            traits.extend(self.resolve_relation(owner_kind, owner.index()).await?);
        }

        Ok(traits)
    }

    /// Fetch the relation list and resolve each entry by index. Entries the
    /// API lists but cannot serve are skipped.
    async fn resolve_relation(
        &self,
        owner_kind: &str,
        index: &str,
    ) -> Result<Vec<Trait>, RepositoryError> {
        let path = format!("{}/{}/traits", owner_kind, index);
        let relation = self
            .traits
            .context()
            .api
            .fetch_by_endpoint::<ResourceListDto>(&path)
            .await?
            .unwrap_or_default();

        let mut traits = Vec::with_capacity(relation.results.len());
        for reference in relation.results {
            match self.traits.get(&reference.index).await? {
                Some(racial_trait) => traits.push(racial_trait),
                None => {
                    tracing::warn!(path = %path, index = %reference.index, "Listed trait could not be resolved");
                }
            }
        }
        Ok(traits)
    }
}
