//! Generic overlay-first repository.

use charbldr_domain::{is_homebrew_index, Resource, ResourceList, ResourceType};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{RepositoryContext, RepositoryError};
use crate::mappers::common::base_resource;
use crate::mappers::MapperTriad;

/// Repository for one entity kind.
///
/// `E` is the domain entity, `D` the wire DTO and `R` the homebrew storage
/// record. The endpoint and the mappers are fixed at construction.
pub struct ResourceRepository<E, D, R> {
    context: RepositoryContext,
    resource: ResourceType,
    mapper: MapperTriad<E, D, R>,
}

impl<E, D, R> ResourceRepository<E, D, R>
where
    E: Resource,
    D: DeserializeOwned,
    R: DeserializeOwned + Serialize,
{
    pub fn new(
        context: RepositoryContext,
        resource: ResourceType,
        mapper: MapperTriad<E, D, R>,
    ) -> Self {
        Self {
            context,
            resource,
            mapper,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource
    }

    pub fn context(&self) -> &RepositoryContext {
        &self.context
    }

    /// Resolve `index`: homebrew overlay first, then the reference API.
    ///
    /// UUID-shaped indexes only exist in the overlay, so a miss there is final.
    pub async fn get(&self, index: &str) -> Result<Option<E>, RepositoryError> {
        if let Some(entity) = self.get_homebrew(index)? {
            return Ok(Some(entity));
        }

        if is_homebrew_index(index) {
            tracing::debug!(resource = %self.resource, index, "Homebrew entity not found");
            return Ok(None);
        }

        let dto = self
            .context
            .api
            .fetch_by_index::<D>(self.resource, index)
            .await?;
        Ok(dto.map(self.mapper.from_api))
    }

    /// The homebrew entity with semantic index `index`, if any.
    pub fn get_homebrew(&self, index: &str) -> Result<Option<E>, RepositoryError> {
        self.context
            .homebrew
            .get(self.resource, index)
            .map(|object| self.from_object(index, object))
            .transpose()
    }

    /// Every homebrew entity of this kind. Records that no longer match the
    /// storage shape are logged and skipped.
    pub fn get_all_homebrew(&self) -> Vec<E> {
        self.context
            .homebrew
            .get_all_by_resource_type(self.resource)
            .into_iter()
            .filter_map(|object| {
                let index = object_index(&object);
                match self.from_object(&index, object) {
                    Ok(entity) => Some(entity),
                    Err(e) => {
                        tracing::warn!(resource = %self.resource, error = %e, "Skipping unreadable homebrew record");
                        None
                    }
                }
            })
            .collect()
    }

    /// Homebrew stubs followed by the reference catalog.
    pub async fn get_all(&self) -> Result<ResourceList, RepositoryError> {
        let homebrew: ResourceList = self
            .get_all_homebrew()
            .iter()
            .map(|entity| entity.base().clone())
            .collect();

        let remote: ResourceList = self
            .context
            .api
            .fetch_all(self.resource)
            .await?
            .results
            .into_iter()
            .map(base_resource)
            .collect();

        Ok(homebrew.concat(remote))
    }

    /// Write `entity` through the overlay.
    ///
    /// An existing homebrew entity with the same index is replaced; anything
    /// else is added and gets a UUID index if it lacks one. Returns the entity
    /// as stored.
    pub fn save_homebrew(&self, entity: &E) -> Result<E, RepositoryError> {
        let index = entity.index().to_string();
        let object = serde_json::to_value((self.mapper.to_storage)(entity))
            .map_err(|e| RepositoryError::invalid_record(&index, e))?;

        let homebrew = &self.context.homebrew;
        let entry = match homebrew.entry_by_index(self.resource, &index) {
            Some(existing) => homebrew.update(existing.id, object)?,
            None => homebrew.add(self.resource, object)?,
        };

        let stored_index = entry.object_index().unwrap_or_default().to_string();
        self.from_object(&stored_index, entry.homebrew_object)
    }

    /// Remove the homebrew entity `index`; `false` if there was none.
    pub fn delete_homebrew(&self, index: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .context
            .homebrew
            .remove_by_index(self.resource, index)?
            .is_some())
    }

    fn from_object(&self, index: &str, object: Value) -> Result<E, RepositoryError> {
        let record: R = serde_json::from_value(object).map_err(|e| {
            tracing::error!(resource = %self.resource, index, error = %e, "Homebrew record does not match its schema");
            RepositoryError::invalid_record(index, e)
        })?;
        Ok((self.mapper.from_storage)(record))
    }
}

fn object_index(object: &Value) -> String {
    object
        .get("index")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
