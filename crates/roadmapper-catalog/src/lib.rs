//! Roadmapper Catalog
//!
//! Static, curated learning-path data for roadmapper.
//!
//! ## Features
//!
//! - Five curated roadmaps keyed by kebab-case skill identifier
//! - Interest-pair associations weighted by confidence
//! - Lazy one-time construction, read-only afterwards
//! - Integrity checks for authoring defects (unknown targets, bad ids)
//!
//! Both tables are scanned in declaration order by the resolvers, so the
//! order of entries decides tie-breaks.

#![deny(unsafe_code, dead_code, unused_imports, unused_variables, missing_docs)]

pub mod catalog;
pub mod error;
pub mod integrity;
pub mod interests;
mod roadmaps;

pub use catalog::{catalog, default_roadmap, lookup, RoadmapCatalog};
pub use error::CatalogError;
pub use interests::interest_mappings;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{catalog, default_roadmap, interest_mappings, lookup, RoadmapCatalog};
}
