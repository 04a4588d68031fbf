//! Roadmapper Types - Core types for learning path recommendations
//!
//! This module defines the roadmap records served by the catalog and the
//! interest associations used to pick one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Skill identifier of the roadmap returned when nothing matches
pub const DEFAULT_SKILL: &str = "web-development";

// ============================================================================
// Roadmap Types
// ============================================================================

/// How demanding a roadmap is for a newcomer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// All levels, easiest first
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a difficulty label is not one of the known levels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}', expected Beginner, Intermediate or Advanced")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

/// A single stage of a roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapStep {
    pub title: String,
    /// Human-readable estimate such as "4-6 weeks"
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    /// Titles of earlier steps in the same roadmap
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl RoadmapStep {
    pub fn new(title: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            duration: duration.into(),
            description: None,
            resources: Vec::new(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_resources<I, S>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resources = resources.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

/// A curated learning path for one skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Kebab-case key, identical to the catalog key
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered steps, earliest first
    pub steps: Vec<RoadmapStep>,
}

impl Roadmap {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        estimated_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            difficulty,
            estimated_time: estimated_time.into(),
            tags: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps(mut self, steps: Vec<RoadmapStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Find a step by its exact title
    pub fn step(&self, title: &str) -> Option<&RoadmapStep> {
        self.steps.iter().find(|s| s.title == title)
    }

    /// Generate a one-line summary for listings
    /// Format: "- {id}: {title} ({difficulty}, {estimated_time})"
    pub fn to_summary(&self) -> String {
        format!(
            "- {}: {} ({}, {})",
            self.id, self.title, self.difficulty, self.estimated_time
        )
    }
}

// ============================================================================
// Interest Mapping Types
// ============================================================================

/// Curated association between a pair of interests and a target skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestMapping {
    /// Lower-case canonical interests; storage order is not significant for matching
    pub interests: [String; 2],
    /// Catalog key of the recommended roadmap
    pub target_skill: String,
    /// Scoring weight in [0, 1]
    pub confidence: f64,
}

impl InterestMapping {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        target_skill: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            interests: [first.into(), second.into()],
            target_skill: target_skill.into(),
            confidence,
        }
    }

    /// True when `{a, b}` equals the stored pair, in either order
    pub fn matches_pair(&self, a: &str, b: &str) -> bool {
        let [first, second] = &self.interests;
        (first == a && second == b) || (first == b && second == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_difficulty_from_str_is_case_insensitive() {
        assert_eq!("beginner".parse::<Difficulty>(), Ok(Difficulty::Beginner));
        assert_eq!(" ADVANCED ".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Intermediate.to_string(), "Intermediate");
    }

    #[test]
    fn test_matches_pair_in_either_order() {
        let mapping = InterestMapping::new("data", "technology", "data-science", 0.95);
        assert!(mapping.matches_pair("data", "technology"));
        assert!(mapping.matches_pair("technology", "data"));
        assert!(!mapping.matches_pair("data", "data"));
    }

    #[test]
    fn test_roadmap_serializes_camel_case() {
        let roadmap = Roadmap::new("rust", "Rust", "Systems", Difficulty::Advanced, "1 year")
            .with_tags(["Systems"])
            .with_steps(vec![RoadmapStep::new("Ownership", "2 weeks")
                .with_resources(["The Book"])]);

        let json = serde_json::to_value(&roadmap).unwrap();
        assert_eq!(json["estimatedTime"], "1 year");
        assert_eq!(json["difficulty"], "Advanced");
        assert_eq!(json["steps"][0]["resources"][0], "The Book");
        assert!(json["steps"][0].get("description").is_none());
    }

    #[test]
    fn test_step_lookup_by_title() {
        let roadmap = Roadmap::new("x", "X", "", Difficulty::Beginner, "")
            .with_steps(vec![
                RoadmapStep::new("Basics", "1 week"),
                RoadmapStep::new("Advanced", "2 weeks").with_prerequisites(["Basics"]),
            ]);

        let advanced = roadmap.step("Advanced").unwrap();
        assert!(advanced.has_prerequisites());
        assert!(roadmap.step("Missing").is_none());
        assert_eq!(
            roadmap.to_summary(),
            "- x: X (Beginner, )"
        );
    }
}
