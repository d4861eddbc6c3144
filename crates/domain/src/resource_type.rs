//! Resource types exposed by the reference API.
//!
//! A resource type names both the remote endpoint (`/api/races`) and the
//! homebrew bank partition (`apiCategoryName`) an entity lives in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::kebab_case;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceType {
    AbilityScores,
    Alignments,
    Backgrounds,
    Classes,
    Conditions,
    DamageTypes,
    Equipment,
    EquipmentCategories,
    Feats,
    Features,
    Languages,
    MagicItems,
    MagicSchools,
    Proficiencies,
    Races,
    Skills,
    Spells,
    Subclasses,
    Subraces,
    Traits,
    WeaponProperties,
}

impl ResourceType {
    pub const ALL: [ResourceType; 21] = [
        Self::AbilityScores,
        Self::Alignments,
        Self::Backgrounds,
        Self::Classes,
        Self::Conditions,
        Self::DamageTypes,
        Self::Equipment,
        Self::EquipmentCategories,
        Self::Feats,
        Self::Features,
        Self::Languages,
        Self::MagicItems,
        Self::MagicSchools,
        Self::Proficiencies,
        Self::Races,
        Self::Skills,
        Self::Spells,
        Self::Subclasses,
        Self::Subraces,
        Self::Traits,
        Self::WeaponProperties,
    ];

    /// Endpoint segment, also used as the homebrew category name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AbilityScores => "ability-scores",
            Self::Alignments => "alignments",
            Self::Backgrounds => "backgrounds",
            Self::Classes => "classes",
            Self::Conditions => "conditions",
            Self::DamageTypes => "damage-types",
            Self::Equipment => "equipment",
            Self::EquipmentCategories => "equipment-categories",
            Self::Feats => "feats",
            Self::Features => "features",
            Self::Languages => "languages",
            Self::MagicItems => "magic-items",
            Self::MagicSchools => "magic-schools",
            Self::Proficiencies => "proficiencies",
            Self::Races => "races",
            Self::Skills => "skills",
            Self::Spells => "spells",
            Self::Subclasses => "subclasses",
            Self::Subraces => "subraces",
            Self::Traits => "traits",
            Self::WeaponProperties => "weapon-properties",
        }
    }

    /// Parses legacy category names such as `"Races"` or `"Magic Items"`.
    pub fn from_category_name(name: &str) -> Result<Self, DomainError> {
        kebab_case(name).parse()
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|resource| resource.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown resource type: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_names_round_trip() {
        for resource in ResourceType::ALL {
            assert_eq!(resource.as_str().parse::<ResourceType>(), Ok(resource));
        }
    }

    #[test]
    fn serde_matches_endpoint_names() {
        for resource in ResourceType::ALL {
            let json = serde_json::to_string(&resource).expect("serialize");
            assert_eq!(json, format!("\"{}\"", resource.as_str()));
        }
    }

    #[test]
    fn legacy_category_names_are_accepted() {
        assert_eq!(
            ResourceType::from_category_name("Races"),
            Ok(ResourceType::Races)
        );
        assert_eq!(
            ResourceType::from_category_name("Magic Items"),
            Ok(ResourceType::MagicItems)
        );
        assert!(ResourceType::from_category_name("Wands").is_err());
    }
}
