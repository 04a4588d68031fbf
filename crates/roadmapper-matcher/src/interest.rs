//! Interest resolution: two free-text interests to a target skill
//!
//! An exact unordered pair match wins outright. Otherwise every mapping is
//! scored by substring containment and the highest score wins, earliest
//! entry first on ties.

use roadmapper_catalog::{default_roadmap, interest_mappings, lookup};
use roadmapper_types::{InterestMapping, Roadmap, DEFAULT_SKILL};
use tracing::debug;

/// Share of a mapping's confidence contributed by one matching input
pub const SLOT_WEIGHT: f64 = 0.5;

/// How an interest pair was matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterestMatchKind {
    /// Stored pair equals the inputs in some order
    Exact,
    /// Best substring score across the table
    Fuzzy {
        /// Winning score, in (0, confidence]
        score: f64,
    },
    /// No entry scored above zero
    Default,
}

/// Resolved skill id plus how it was found
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestMatch<'a> {
    /// Catalog key of the recommended roadmap
    pub target_skill: &'a str,
    /// Match stage that selected it
    pub kind: InterestMatchKind,
}

/// Lower-case and trim an interest
#[must_use]
pub fn normalize_interest(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Contribution of one normalized input to a mapping's score
///
/// Full `confidence * SLOT_WEIGHT` when the input and any stored interest
/// contain one another, otherwise zero.
#[must_use]
pub fn slot_score(mapping: &InterestMapping, input: &str) -> f64 {
    let overlaps = mapping
        .interests
        .iter()
        .any(|interest| interest.contains(input) || input.contains(interest.as_str()));

    if overlaps {
        mapping.confidence * SLOT_WEIGHT
    } else {
        0.0
    }
}

/// Combined score of both normalized inputs for one mapping
#[must_use]
pub fn pair_score(mapping: &InterestMapping, a: &str, b: &str) -> f64 {
    slot_score(mapping, a) + slot_score(mapping, b)
}

/// Resolves interest pairs against an association table
#[derive(Debug, Clone, Copy)]
pub struct InterestResolver<'a> {
    mappings: &'a [InterestMapping],
    default_skill: &'a str,
}

impl<'a> InterestResolver<'a> {
    /// Create a resolver over `mappings` falling back to `web-development`
    #[must_use]
    pub fn new(mappings: &'a [InterestMapping]) -> Self {
        Self {
            mappings,
            default_skill: DEFAULT_SKILL,
        }
    }

    /// Override the skill returned when nothing scores
    #[must_use]
    pub fn with_default(mut self, skill: &'a str) -> Self {
        self.default_skill = skill;
        self
    }

    /// Target skill for the pair, never fails
    #[must_use]
    pub fn resolve(&self, a: &str, b: &str) -> &'a str {
        self.resolve_detailed(a, b).target_skill
    }

    /// Target skill for the pair with the stage that matched
    #[must_use]
    pub fn resolve_detailed(&self, a: &str, b: &str) -> InterestMatch<'a> {
        let a = normalize_interest(a);
        let b = normalize_interest(b);

        if let Some(mapping) = self.mappings.iter().find(|m| m.matches_pair(&a, &b)) {
            debug!(
                "Interests ({}, {}) matched pair exactly -> {}",
                a, b, mapping.target_skill
            );
            return InterestMatch {
                target_skill: &mapping.target_skill,
                kind: InterestMatchKind::Exact,
            };
        }

        let mut best: Option<&'a InterestMapping> = None;
        let mut highest = 0.0;

        for mapping in self.mappings {
            let score = pair_score(mapping, &a, &b);
            // Strict comparison keeps the earliest entry on ties
            if score > highest {
                highest = score;
                best = Some(mapping);
            }
        }

        match best {
            Some(mapping) => {
                debug!(
                    "Interests ({}, {}) scored {:.3} -> {}",
                    a, b, highest, mapping.target_skill
                );
                InterestMatch {
                    target_skill: &mapping.target_skill,
                    kind: InterestMatchKind::Fuzzy { score: highest },
                }
            }
            None => {
                debug!(
                    "Interests ({}, {}) matched nothing, using '{}'",
                    a, b, self.default_skill
                );
                InterestMatch {
                    target_skill: self.default_skill,
                    kind: InterestMatchKind::Default,
                }
            }
        }
    }
}

/// Resolve an interest pair against the curated table
#[must_use]
pub fn resolve_by_interests(a: &str, b: &str) -> &'static str {
    InterestResolver::new(interest_mappings()).resolve(a, b)
}

/// Resolve an interest pair straight to a curated roadmap
///
/// Falls back to the default roadmap if the resolved id is not in the catalog.
#[must_use]
pub fn recommend_for_interests(a: &str, b: &str) -> &'static Roadmap {
    lookup(resolve_by_interests(a, b)).unwrap_or_else(default_roadmap)
}
