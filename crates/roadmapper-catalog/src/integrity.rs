//! Static consistency checks over the catalog and interest table
//!
//! Violations are authoring defects in the curated data, so these checks are
//! meant for tests and the `check` command rather than the resolution path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use roadmapper_types::InterestMapping;
use tracing::{debug, warn};

use crate::catalog::RoadmapCatalog;
use crate::error::{CatalogError, Result};

static KEBAB_ID: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").ok());

/// A prerequisite title that names no step of its roadmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingPrerequisite {
    /// Roadmap id
    pub roadmap: String,
    /// Step that declares the prerequisite
    pub step: String,
    /// Title that could not be found
    pub prerequisite: String,
}

impl fmt::Display for DanglingPrerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: step '{}' lists unknown prerequisite '{}'",
            self.roadmap, self.step, self.prerequisite
        )
    }
}

/// Collect every integrity violation in declaration order
pub fn check(catalog: &RoadmapCatalog, mappings: &[InterestMapping]) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    for roadmap in catalog.iter() {
        if !is_kebab_id(&roadmap.id) {
            errors.push(CatalogError::InvalidId {
                id: roadmap.id.clone(),
            });
        }

        if roadmap.steps.is_empty() {
            errors.push(CatalogError::EmptySteps {
                id: roadmap.id.clone(),
            });
        }

        for (i, step) in roadmap.steps.iter().enumerate() {
            if step.title.trim().is_empty() {
                errors.push(CatalogError::EmptyStepTitle {
                    id: roadmap.id.clone(),
                    position: i + 1,
                });
            }
        }
    }

    for mapping in mappings {
        let [first, second] = &mapping.interests;

        if !catalog.contains(&mapping.target_skill) {
            errors.push(CatalogError::UnknownTarget {
                first: first.clone(),
                second: second.clone(),
                target: mapping.target_skill.clone(),
            });
        }

        if !(0.0..=1.0).contains(&mapping.confidence) {
            errors.push(CatalogError::ConfidenceOutOfRange {
                target: mapping.target_skill.clone(),
                confidence: mapping.confidence,
            });
        }

        for interest in &mapping.interests {
            if *interest != interest.trim().to_lowercase() || interest.is_empty() {
                errors.push(CatalogError::NonCanonicalInterest {
                    interest: interest.clone(),
                });
            }
        }
    }

    debug!(
        "Integrity check over {} roadmaps and {} mappings found {} violations",
        catalog.len(),
        mappings.len(),
        errors.len()
    );

    errors
}

/// Fail on the first integrity violation
pub fn verify(catalog: &RoadmapCatalog, mappings: &[InterestMapping]) -> Result<()> {
    match check(catalog, mappings).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// List prerequisites that name no step in the same roadmap
///
/// Prerequisites are descriptive metadata; this never rejects anything.
pub fn dangling_prerequisites(catalog: &RoadmapCatalog) -> Vec<DanglingPrerequisite> {
    let mut dangling = Vec::new();

    for roadmap in catalog.iter() {
        for step in &roadmap.steps {
            for prerequisite in &step.prerequisites {
                if roadmap.step(prerequisite).is_none() {
                    warn!(
                        "Roadmap '{}' step '{}' lists unknown prerequisite '{}'",
                        roadmap.id, step.title, prerequisite
                    );
                    dangling.push(DanglingPrerequisite {
                        roadmap: roadmap.id.clone(),
                        step: step.title.clone(),
                        prerequisite: prerequisite.clone(),
                    });
                }
            }
        }
    }

    dangling
}

fn is_kebab_id(id: &str) -> bool {
    KEBAB_ID.as_ref().is_some_and(|re| re.is_match(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog, interest_mappings};
    use pretty_assertions::assert_eq;
    use roadmapper_types::{Difficulty, Roadmap, RoadmapStep};
    use rstest::rstest;

    fn custom_catalog(ids: &[&str]) -> RoadmapCatalog {
        let roadmaps = ids
            .iter()
            .map(|id| {
                Roadmap::new(*id, *id, "", Difficulty::Beginner, "")
                    .with_steps(vec![RoadmapStep::new("Start", "1 week")])
            })
            .collect();
        RoadmapCatalog::from_roadmaps(roadmaps, ids[0]).unwrap()
    }

    #[test]
    fn test_curated_tables_are_consistent() {
        assert_eq!(check(catalog(), interest_mappings()), Vec::<CatalogError>::new());
        assert!(verify(catalog(), interest_mappings()).is_ok());
    }

    #[test]
    fn test_every_target_exists() {
        for mapping in interest_mappings() {
            assert!(
                catalog().contains(&mapping.target_skill),
                "missing {}",
                mapping.target_skill
            );
        }
    }

    #[test]
    fn test_unknown_target_reported() {
        let catalog = custom_catalog(&["web-development"]);
        let mappings = vec![InterestMapping::new("cooking", "chemistry", "culinary-arts", 0.5)];

        assert_eq!(
            verify(&catalog, &mappings),
            Err(CatalogError::UnknownTarget {
                first: "cooking".into(),
                second: "chemistry".into(),
                target: "culinary-arts".into(),
            })
        );
    }

    #[test]
    fn test_mapping_shape_violations_collected() {
        let catalog = custom_catalog(&["web-development"]);
        let mappings = vec![InterestMapping::new("Art ", "technology", "web-development", 1.5)];

        let errors = check(&catalog, &mappings);
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], CatalogError::ConfidenceOutOfRange { .. }));
        assert!(matches!(errors[1], CatalogError::NonCanonicalInterest { .. }));
    }

    #[rstest]
    #[case("web-development", true)]
    #[case("cybersecurity", true)]
    #[case("web3-dev", true)]
    #[case("Web-Development", false)]
    #[case("web_development", false)]
    #[case("-web", false)]
    #[case("web--dev", false)]
    #[case("", false)]
    fn test_kebab_ids(#[case] id: &str, #[case] valid: bool) {
        assert_eq!(is_kebab_id(id), valid);
    }

    #[test]
    fn test_empty_steps_reported() {
        let catalog = RoadmapCatalog::from_roadmaps(
            vec![Roadmap::new("empty", "Empty", "", Difficulty::Beginner, "")],
            "empty",
        )
        .unwrap();

        assert_eq!(
            check(&catalog, &[]),
            vec![CatalogError::EmptySteps { id: "empty".into() }]
        );
    }

    #[test]
    fn test_curated_dangling_prerequisite_is_reported_not_rejected() {
        let dangling = dangling_prerequisites(catalog());
        assert_eq!(
            dangling,
            vec![DanglingPrerequisite {
                roadmap: "digital-marketing".into(),
                step: "Analytics & Optimization".into(),
                prerequisite: "SEO".into(),
            }]
        );
        assert!(check(catalog(), interest_mappings()).is_empty());
    }
}
