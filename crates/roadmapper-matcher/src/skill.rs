//! Skill resolution: free-text skill name to roadmap
//!
//! First match wins: exact key on the normalized text, then substring
//! matching on the raw lower-cased text in catalog order, then the default.

use roadmapper_catalog::{catalog, RoadmapCatalog};
use roadmapper_types::Roadmap;
use tracing::debug;

/// How a skill phrase was matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillMatchKind {
    /// Normalized text equals a catalog key
    Exact,
    /// Title, tag, or key-phrase containment
    Substring,
    /// Nothing matched
    Default,
}

/// Resolved roadmap plus how it was found
#[derive(Debug, Clone, Copy)]
pub struct SkillMatch<'a> {
    /// Selected roadmap
    pub roadmap: &'a Roadmap,
    /// Match stage that selected it
    pub kind: SkillMatchKind,
}

/// Canonical key form of a skill phrase
///
/// Lower-cases, trims, joins whitespace runs with a single hyphen and drops
/// anything outside `[a-z0-9-]`.
#[must_use]
pub fn normalize_skill(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Resolves skill phrases against a catalog
#[derive(Debug, Clone, Copy)]
pub struct SkillResolver<'a> {
    catalog: &'a RoadmapCatalog,
}

impl<'a> SkillResolver<'a> {
    /// Create a resolver over `catalog`
    #[must_use]
    pub fn new(catalog: &'a RoadmapCatalog) -> Self {
        Self { catalog }
    }

    /// Best roadmap for `raw`, never fails
    #[must_use]
    pub fn resolve(&self, raw: &str) -> &'a Roadmap {
        self.resolve_detailed(raw).roadmap
    }

    /// Best roadmap for `raw` with the stage that matched
    #[must_use]
    pub fn resolve_detailed(&self, raw: &str) -> SkillMatch<'a> {
        let normalized = normalize_skill(raw);

        if let Some(roadmap) = self.catalog.get(&normalized) {
            debug!("Skill '{}' matched key '{}' exactly", raw, roadmap.id);
            return SkillMatch {
                roadmap,
                kind: SkillMatchKind::Exact,
            };
        }

        // Substring stage works on the untrimmed lower-cased input
        let lowered = raw.to_lowercase();
        if let Some(roadmap) = self.catalog.iter().find(|r| contains_skill(r, &lowered)) {
            debug!("Skill '{}' matched '{}' by substring", raw, roadmap.id);
            return SkillMatch {
                roadmap,
                kind: SkillMatchKind::Substring,
            };
        }

        let roadmap = self.catalog.default_roadmap();
        debug!("Skill '{}' matched nothing, using '{}'", raw, roadmap.id);
        SkillMatch {
            roadmap,
            kind: SkillMatchKind::Default,
        }
    }
}

fn contains_skill(roadmap: &Roadmap, lowered: &str) -> bool {
    roadmap.title.to_lowercase().contains(lowered)
        || roadmap
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(lowered))
        || lowered.contains(&roadmap.id.replace('-', " "))
}

/// Resolve a skill phrase against the curated catalog
#[must_use]
pub fn resolve_by_skill(raw: &str) -> &'static Roadmap {
    SkillResolver::new(catalog()).resolve(raw)
}
