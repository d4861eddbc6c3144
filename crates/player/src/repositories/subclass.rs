//! Subclasses with their level-gated features stitched in.

use charbldr_domain::{Resource, ResourceList, ResourceType, Subclass, SubclassFeature};
use charbldr_shared::dto::{ClassLevelDto, SubclassDto};
use charbldr_shared::records::SubclassRecord;

use super::{
    feature_repository, FeatureRepository, RepositoryContext, RepositoryError, ResourceRepository,
};
use crate::mappers;

pub struct SubclassRepository {
    subclasses: ResourceRepository<Subclass, SubclassDto, SubclassRecord>,
    features: FeatureRepository,
}

impl SubclassRepository {
    pub fn new(context: RepositoryContext) -> Self {
        Self {
            subclasses: ResourceRepository::new(
                context.clone(),
                ResourceType::Subclasses,
                mappers::subclass::triad(),
            ),
            features: feature_repository(context),
        }
    }

    /// Reference subclasses get `features` flattened from
    /// `subclasses/{index}/levels`; homebrew subclasses carry them inline.
    pub async fn get(&self, index: &str) -> Result<Option<Subclass>, RepositoryError> {
        let Some(mut subclass) = self.subclasses.get(index).await? else {
            return Ok(None);
        };

        if !subclass.is_homebrew() {
            subclass.features = self.remote_features(subclass.index()).await?;
        }

        Ok(Some(subclass))
    }

    pub async fn get_all(&self) -> Result<ResourceList, RepositoryError> {
        self.subclasses.get_all().await
    }

    pub fn save_homebrew(&self, subclass: &Subclass) -> Result<Subclass, RepositoryError> {
        self.subclasses.save_homebrew(subclass)
    }

    pub fn delete_homebrew(&self, index: &str) -> Result<bool, RepositoryError> {
        self.subclasses.delete_homebrew(index)
    }

    async fn remote_features(&self, index: &str) -> Result<Vec<SubclassFeature>, RepositoryError> {
        let levels = self
            .subclasses
            .context()
            .api
            .fetch_by_endpoint::<Vec<ClassLevelDto>>(&format!("subclasses/{}/levels", index))
            .await?
            .unwrap_or_default();

        let mut features = Vec::new();
        for level in levels {
            for reference in level.features {
                match self.features.get(&reference.index).await? {
                    Some(feature) => features.push(SubclassFeature {
                        level: level.level,
                        name: feature.base.name,
                        description: feature.description,
                    }),
                    None => {
                        tracing::warn!(subclass = index, feature = %reference.index, "Subclass feature could not be resolved");
                    }
                }
            }
        }
        Ok(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::testing::{fixtures, FakeTransport, TestContext};
    use charbldr_domain::BaseResource;

    const CHRONURGY: &str = "a1b2c3d4-0000-4000-8000-0000000000c1";

    fn evocation_transport() -> FakeTransport {
        FakeTransport::new()
            .with_json(&fixtures::url("subclasses/evocation"), fixtures::evocation())
            .with_json(
                &fixtures::url("subclasses/evocation/levels"),
                fixtures::evocation_levels(),
            )
            .with_json(
                &fixtures::url("features/evocation-savant"),
                fixtures::evocation_feature(
                    "evocation-savant",
                    "Evocation Savant",
                    2,
                    "The gold and time you must spend to copy an evocation spell is halved.",
                ),
            )
            .with_json(
                &fixtures::url("features/potent-cantrip"),
                fixtures::evocation_feature(
                    "potent-cantrip",
                    "Potent Cantrip",
                    6,
                    "Your damaging cantrips affect even creatures that avoid the brunt of the effect.",
                ),
            )
    }

    #[tokio::test]
    async fn reference_subclass_gets_level_features() {
        let test = TestContext::new(evocation_transport());
        let repository = SubclassRepository::new(test.context());

        let evocation = repository
            .get("evocation")
            .await
            .expect("get")
            .expect("found");

        let features: Vec<(u8, &str)> = evocation
            .features
            .iter()
            .map(|f| (f.level, f.name.as_str()))
            .collect();
        assert_eq!(features, vec![(2, "Evocation Savant"), (6, "Potent Cantrip")]);
        assert!(evocation.features[1].description.starts_with("Your damaging cantrips"));
    }

    #[tokio::test]
    async fn homebrew_subclass_is_not_hydrated() {
        let test = TestContext::new(evocation_transport());
        let repository = SubclassRepository::new(test.context());
        let mut chronurgy =
            mappers::subclass::from_api(serde_json::from_value(fixtures::evocation()).expect("dto"));
        chronurgy.base = BaseResource::homebrew(CHRONURGY, "Chronurgy", "");
        chronurgy.features = vec![SubclassFeature {
            level: 2,
            name: "Temporal Awareness".to_string(),
            description: "Add your Intelligence modifier to initiative.".to_string(),
        }];
        repository.save_homebrew(&chronurgy).expect("save");

        let stored = repository.get(CHRONURGY).await.expect("get").expect("found");

        assert_eq!(stored.features, chronurgy.features);
        assert_eq!(test.transport.total_calls(), 0);
    }

    #[tokio::test]
    async fn subclass_without_levels_has_no_features() {
        let transport = FakeTransport::new()
            .with_json(&fixtures::url("subclasses/evocation"), fixtures::evocation());
        let test = TestContext::new(transport);
        let repository = SubclassRepository::new(test.context());

        let evocation = repository
            .get("evocation")
            .await
            .expect("get")
            .expect("found");

        assert!(evocation.features.is_empty());
    }
}
