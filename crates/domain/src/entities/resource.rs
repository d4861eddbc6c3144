//! Base resource and catalog types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity shared by every resolved resource.
///
/// Also used on its own as the stub for cross-references (a spell's school, a
/// race's ability-bonus target) so that relations never expand recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResource {
    /// Kebab-case id from the reference dataset, or a UUID for homebrew.
    pub index: String,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub is_homebrew: bool,
}

impl BaseResource {
    pub fn reference(
        index: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
            url: url.into(),
            is_homebrew: false,
        }
    }

    pub fn homebrew(
        index: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            index: index.into(),
            name: name.into(),
            url: url.into(),
            is_homebrew: true,
        }
    }
}

/// Access to the embedded [`BaseResource`] of a domain entity.
pub trait Resource {
    fn base(&self) -> &BaseResource;

    fn index(&self) -> &str {
        &self.base().index
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn is_homebrew(&self) -> bool {
        self.base().is_homebrew
    }
}

impl Resource for BaseResource {
    fn base(&self) -> &BaseResource {
        self
    }
}

/// Whether an index belongs to the homebrew id space (UUID-shaped).
///
/// Reference ids are kebab-case and never parse as a UUID, which is what makes
/// "homebrew first, then remote" an unambiguous lookup order.
pub fn is_homebrew_index(index: &str) -> bool {
    Uuid::parse_str(index).is_ok()
}

/// A lightweight catalog of resources (name/index/url only).
///
/// `count` always equals `results.len()`; the fields are private so the
/// invariant cannot be broken after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceList {
    count: usize,
    results: Vec<BaseResource>,
}

impl ResourceList {
    pub fn new(results: Vec<BaseResource>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn results(&self) -> &[BaseResource] {
        &self.results
    }

    pub fn into_results(self) -> Vec<BaseResource> {
        self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Appends `other` after `self`, preserving order.
    pub fn concat(mut self, other: ResourceList) -> Self {
        self.results.extend(other.results);
        self.count = self.results.len();
        self
    }
}

impl FromIterator<BaseResource> for ResourceList {
    fn from_iter<I: IntoIterator<Item = BaseResource>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homebrew_index_detection() {
        assert!(is_homebrew_index("a1b2c3d4-0000-4000-8000-000000000001"));
        assert!(!is_homebrew_index("dwarf"));
        assert!(!is_homebrew_index("hill-dwarf"));
        assert!(!is_homebrew_index(""));
    }

    #[test]
    fn resource_list_count_tracks_results() {
        let homebrew = ResourceList::new(vec![BaseResource::homebrew(
            "a1b2c3d4-0000-4000-8000-000000000001",
            "Moon Elf",
            "",
        )]);
        let remote: ResourceList = ["dwarf", "elf"]
            .iter()
            .map(|i| BaseResource::reference(*i, *i, format!("/api/races/{}", i)))
            .collect();

        let merged = homebrew.concat(remote);
        assert_eq!(merged.count(), 3);
        assert_eq!(merged.count(), merged.results().len());
        assert_eq!(merged.results()[0].name, "Moon Elf");
        assert_eq!(merged.results()[2].index, "elf");
    }

    #[test]
    fn base_resource_serializes_camel_case() {
        let base = BaseResource::reference("dwarf", "Dwarf", "/api/races/dwarf");
        let json = serde_json::to_value(&base).expect("serialize");
        assert_eq!(json["isHomebrew"], serde_json::json!(false));
    }
}
