//! Roadmapper Matcher
//!
//! Maps noisy user text to one of the curated roadmaps.
//!
//! ## Features
//!
//! - Skill resolution: exact key after normalization, then title/tag/key
//!   containment in catalog order, then the default roadmap
//! - Interest resolution: exact unordered pair, then confidence-weighted
//!   substring scoring with earliest-entry tie-breaks
//! - Total operations: every input yields a displayable result
//!
//! Resolvers borrow their tables, so they run equally against the curated
//! statics or a custom catalog.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod interest;
pub mod skill;

pub use interest::{
    recommend_for_interests, resolve_by_interests, InterestMatch, InterestMatchKind,
    InterestResolver,
};
pub use roadmapper_catalog::lookup;
pub use skill::{resolve_by_skill, SkillMatch, SkillMatchKind, SkillResolver};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{lookup, resolve_by_interests, resolve_by_skill};
}
