//! Class progression tables.

use charbldr_domain::{CharacterClass, ClassLevel, NamedDescription, Resource, ResourceType};
use charbldr_shared::dto::ClassLevelDto;

use super::{feature_repository, FeatureRepository, RepositoryContext, RepositoryError};
use crate::mappers;

/// Levels of a class. Homebrew classes carry their levels inline; reference
/// classes are resolved through `classes/{index}/levels` with every level's
/// feature descriptions hydrated.
pub struct ClassLevelRepository {
    context: RepositoryContext,
    features: FeatureRepository,
}

impl ClassLevelRepository {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            features: feature_repository(context.clone()),
            context,
        }
    }

    pub async fn levels_for_class(
        &self,
        class: &CharacterClass,
    ) -> Result<Vec<ClassLevel>, RepositoryError> {
        if class.is_homebrew() {
            return Ok(class.levels.clone());
        }

        let dtos = self
            .context
            .api
            .fetch_by_endpoint::<Vec<ClassLevelDto>>(&format!(
                "{}/{}/levels",
                ResourceType::Classes,
                class.index()
            ))
            .await?
            .unwrap_or_default();

        let mut levels = Vec::with_capacity(dtos.len());
        for dto in dtos {
            levels.push(self.hydrate(mappers::class_level::from_api(dto)).await?);
        }
        Ok(levels)
    }

    pub async fn level(
        &self,
        class: &CharacterClass,
        level: u8,
    ) -> Result<Option<ClassLevel>, RepositoryError> {
        if class.is_homebrew() {
            return Ok(class.levels.iter().find(|l| l.level == level).cloned());
        }

        let dto = self
            .context
            .api
            .fetch_by_endpoint::<ClassLevelDto>(&format!(
                "{}/{}/levels/{}",
                ResourceType::Classes,
                class.index(),
                level
            ))
            .await?;

        match dto {
            Some(dto) => Ok(Some(self.hydrate(mappers::class_level::from_api(dto)).await?)),
            None => Ok(None),
        }
    }

    async fn hydrate(&self, mut level: ClassLevel) -> Result<ClassLevel, RepositoryError> {
        let mut details: Vec<NamedDescription> = Vec::with_capacity(level.features.len());
        for reference in &level.features {
            match self.features.get(&reference.index).await? {
                Some(feature) => details.push(feature.to_named_description()),
                None => {
                    tracing::warn!(level = %level.base.index, feature = %reference.index, "Level feature could not be resolved");
                }
            }
        }
        level.feature_details = details;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, FakeTransport, TestContext};
    use charbldr_domain::BaseResource;
    use serde_json::json;

    fn wizard() -> CharacterClass {
        mappers::class::from_api(serde_json::from_value(fixtures::wizard()).expect("dto"))
    }

    fn wizard_transport() -> FakeTransport {
        FakeTransport::new()
            .with_json(
                &fixtures::url("classes/wizard/levels"),
                json!([fixtures::wizard_level(1), fixtures::wizard_level(2)]),
            )
            .with_json(&fixtures::url("classes/wizard/levels/1"), fixtures::wizard_level(1))
            .with_json(&fixtures::url("features/arcane-recovery"), fixtures::arcane_recovery())
            .with_json(
                &fixtures::url("features/spellcasting-wizard"),
                fixtures::spellcasting_wizard(),
            )
    }

    #[tokio::test]
    async fn reference_levels_are_hydrated() {
        let test = TestContext::new(wizard_transport());
        let repository = ClassLevelRepository::new(test.context());

        let levels = repository.levels_for_class(&wizard()).await.expect("levels");

        assert_eq!(levels.len(), 2);
        let names: Vec<&str> = levels[0]
            .feature_details
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["Arcane Recovery", "Spellcasting: Wizard"]);
        assert!(levels[1].feature_details.is_empty());
    }

    #[tokio::test]
    async fn single_reference_level() {
        let test = TestContext::new(wizard_transport());
        let repository = ClassLevelRepository::new(test.context());

        let level = repository
            .level(&wizard(), 1)
            .await
            .expect("level")
            .expect("found");

        assert_eq!(level.level, 1);
        assert_eq!(level.feature_details.len(), 2);
        assert!(repository.level(&wizard(), 21).await.expect("level").is_none());
    }

    #[tokio::test]
    async fn homebrew_class_levels_are_inline() {
        let test = TestContext::new(FakeTransport::new());
        let repository = ClassLevelRepository::new(test.context());
        let mut artificer = wizard();
        artificer.base =
            BaseResource::homebrew("a1b2c3d4-0000-4000-8000-0000000000d1", "Artificer", "");
        let mut first = mappers::class_level::from_api(
            serde_json::from_value(fixtures::wizard_level(1)).expect("level"),
        );
        first.feature_details = vec![NamedDescription::new("Magical Tinkering", "Imbue an object.")];
        artificer.levels = vec![first.clone()];

        let levels = repository.levels_for_class(&artificer).await.expect("levels");
        let level = repository.level(&artificer, 1).await.expect("level");

        assert_eq!(levels, vec![first.clone()]);
        assert_eq!(level, Some(first));
        assert_eq!(test.transport.total_calls(), 0);
    }
}
