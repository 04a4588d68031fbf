//! Error types for catalog construction and integrity checks

use thiserror::Error;

/// Catalog data errors
///
/// These describe authoring defects in the curated tables. Resolution itself
/// never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Two roadmaps share a key
    #[error("Duplicate roadmap id '{id}'")]
    DuplicateId {
        /// Repeated id
        id: String,
    },

    /// The fallback roadmap is not in the catalog
    #[error("Default roadmap '{id}' is missing from the catalog")]
    MissingDefault {
        /// Expected default id
        id: String,
    },

    /// Id is not lower-case kebab-case
    #[error("Roadmap id '{id}' must contain only lowercase letters, numbers, and hyphens")]
    InvalidId {
        /// Offending id
        id: String,
    },

    /// Roadmap has no steps
    #[error("Roadmap '{id}' has no steps")]
    EmptySteps {
        /// Roadmap id
        id: String,
    },

    /// A step title is blank
    #[error("Roadmap '{id}' step #{position} has an empty title")]
    EmptyStepTitle {
        /// Roadmap id
        id: String,
        /// One-based step position
        position: usize,
    },

    /// Interest mapping points at a roadmap that does not exist
    #[error("Interest pair ({first}, {second}) targets unknown roadmap '{target}'")]
    UnknownTarget {
        /// First stored interest
        first: String,
        /// Second stored interest
        second: String,
        /// Missing catalog key
        target: String,
    },

    /// Confidence weight outside [0, 1]
    #[error("Interest mapping for '{target}' has confidence {confidence} outside [0, 1]")]
    ConfidenceOutOfRange {
        /// Mapping target
        target: String,
        /// Stored weight
        confidence: f64,
    },

    /// Stored interest is not trimmed lower-case text
    #[error("Interest '{interest}' is not in lower-case canonical form")]
    NonCanonicalInterest {
        /// Offending interest
        interest: String,
    },
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;
