//! Roadmap catalog keyed by skill identifier
//!
//! The curated catalog is built once on first access and is read-only for
//! the rest of the process. Iteration always follows declaration order.

use std::collections::HashMap;
use std::sync::LazyLock;

use roadmapper_types::{Roadmap, DEFAULT_SKILL};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::roadmaps::curated_roadmaps;

static CATALOG: LazyLock<RoadmapCatalog> = LazyLock::new(|| {
    let catalog = RoadmapCatalog::from_roadmaps(curated_roadmaps(), DEFAULT_SKILL)
        .expect("curated roadmap table must have unique ids and contain the default");
    debug!("Roadmap catalog ready with {} roadmaps", catalog.len());
    catalog
});

/// Immutable collection of roadmaps
#[derive(Debug, Clone)]
pub struct RoadmapCatalog {
    /// Roadmaps in declaration order
    roadmaps: Vec<Roadmap>,
    /// Id → position in `roadmaps`
    index: HashMap<String, usize>,
    /// Position of the fallback roadmap
    default: usize,
}

impl RoadmapCatalog {
    /// Build a catalog from roadmaps in declaration order
    ///
    /// Fails on duplicate ids or when `default_id` is not among them.
    pub fn from_roadmaps(roadmaps: Vec<Roadmap>, default_id: &str) -> Result<Self> {
        let mut index = HashMap::with_capacity(roadmaps.len());

        for (position, roadmap) in roadmaps.iter().enumerate() {
            if index.insert(roadmap.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId {
                    id: roadmap.id.clone(),
                });
            }
        }

        let default = *index
            .get(default_id)
            .ok_or_else(|| CatalogError::MissingDefault {
                id: default_id.to_string(),
            })?;

        Ok(Self {
            roadmaps,
            index,
            default,
        })
    }

    /// Exact-key lookup, no normalization
    pub fn get(&self, id: &str) -> Option<&Roadmap> {
        self.index.get(id).map(|&position| &self.roadmaps[position])
    }

    /// Check whether a key exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Roadmaps in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Roadmap> {
        self.roadmaps.iter()
    }

    /// Keys in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.roadmaps.iter().map(|r| r.id.as_str())
    }

    /// Roadmap returned when nothing else matches
    pub fn default_roadmap(&self) -> &Roadmap {
        &self.roadmaps[self.default]
    }

    /// Get number of roadmaps
    pub fn len(&self) -> usize {
        self.roadmaps.len()
    }

    /// Check if catalog is empty
    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    /// Generate the catalog listing
    /// Format:
    /// - web-development: Full-Stack Web Development (Beginner, 6-8 months)
    /// - data-science: ...
    pub fn summaries(&self) -> String {
        let mut list = String::new();

        for roadmap in &self.roadmaps {
            list.push_str(&roadmap.to_summary());
            list.push('\n');
        }

        list
    }
}

/// The process-wide curated catalog
pub fn catalog() -> &'static RoadmapCatalog {
    &CATALOG
}

/// Look up a curated roadmap by exact key
pub fn lookup(id: &str) -> Option<&'static Roadmap> {
    CATALOG.get(id)
}

/// The curated fallback roadmap (`web-development`)
pub fn default_roadmap() -> &'static Roadmap {
    CATALOG.default_roadmap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roadmapper_types::{Difficulty, RoadmapStep};
    use rstest::rstest;

    fn roadmap(id: &str) -> Roadmap {
        Roadmap::new(id, id, "", Difficulty::Beginner, "1 month")
            .with_steps(vec![RoadmapStep::new("Start", "1 week")])
    }

    #[test]
    fn test_from_roadmaps_rejects_duplicates() {
        let err = RoadmapCatalog::from_roadmaps(vec![roadmap("a"), roadmap("a")], "a").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId { id: "a".into() });
    }

    #[test]
    fn test_from_roadmaps_requires_default() {
        let err = RoadmapCatalog::from_roadmaps(vec![roadmap("a")], "b").unwrap_err();
        assert_eq!(err, CatalogError::MissingDefault { id: "b".into() });
    }

    #[test]
    fn test_custom_catalog_keeps_declaration_order() {
        let catalog =
            RoadmapCatalog::from_roadmaps(vec![roadmap("z"), roadmap("a"), roadmap("m")], "a")
                .unwrap();
        assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["z", "a", "m"]);
        assert_eq!(catalog.default_roadmap().id, "a");
    }

    #[test]
    fn test_curated_declaration_order() {
        assert_eq!(
            catalog().ids().collect::<Vec<_>>(),
            vec![
                "web-development",
                "data-science",
                "digital-marketing",
                "mobile-development",
                "cybersecurity",
            ]
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(lookup("web-development").is_some());
        assert!(lookup("Web Development").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_default_roadmap() {
        assert_eq!(default_roadmap().id, DEFAULT_SKILL);
    }

    #[rstest]
    #[case("web-development")]
    #[case("data-science")]
    #[case("digital-marketing")]
    #[case("mobile-development")]
    #[case("cybersecurity")]
    fn test_curated_roadmap_shape(#[case] id: &str) {
        let roadmap = lookup(id).unwrap();
        assert_eq!(roadmap.id, id);
        assert!(!roadmap.steps.is_empty());
        assert!(Difficulty::ALL.contains(&roadmap.difficulty));
    }

    #[test]
    fn test_summaries_one_line_per_roadmap() {
        let summaries = catalog().summaries();
        assert_eq!(summaries.lines().count(), catalog().len());
        assert!(summaries
            .starts_with("- web-development: Full-Stack Web Development (Beginner, 6-8 months)"));
    }
}
