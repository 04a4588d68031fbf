use crate::cli::Commands;
use crate::config::Config;
use crate::render::{render_catalog, render_roadmap};
use anyhow::{bail, Result};
use roadmapper_catalog::{catalog, default_roadmap, integrity, interest_mappings, lookup};
use roadmapper_matcher::{InterestResolver, SkillResolver};
use roadmapper_types::Roadmap;
use std::io::Write;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Skill must not be empty")]
    EmptySkill,

    #[error("Interest #{position} must not be empty")]
    EmptyInterest { position: usize },
}

/// What the user asked a roadmap for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapRequest {
    Skill(String),
    Interests { first: String, second: String },
}

impl RoadmapRequest {
    /// Blank input never reaches the resolvers
    pub fn validate(&self) -> Result<(), RequestError> {
        match self {
            Self::Skill(text) if text.trim().is_empty() => Err(RequestError::EmptySkill),
            Self::Interests { first, .. } if first.trim().is_empty() => {
                Err(RequestError::EmptyInterest { position: 1 })
            }
            Self::Interests { second, .. } if second.trim().is_empty() => {
                Err(RequestError::EmptyInterest { position: 2 })
            }
            _ => Ok(()),
        }
    }
}

/// Roadmap service - main orchestrator
pub struct RoadmapService {
    config: Config,
}

impl RoadmapService {
    /// Create a new roadmap service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Validate the request, wait out the configured latency, then resolve
    pub async fn generate(
        &self,
        request: &RoadmapRequest,
    ) -> Result<&'static Roadmap, RequestError> {
        request.validate()?;

        let delay = Duration::from_millis(self.config.generator.delay_ms);
        if !delay.is_zero() {
            info!("Generating roadmap...");
            tokio::time::sleep(delay).await;
        }

        let roadmap = match request {
            RoadmapRequest::Skill(text) => {
                let found = SkillResolver::new(catalog()).resolve_detailed(text);
                info!("Skill '{}' -> {} ({:?})", text, found.roadmap.id, found.kind);
                found.roadmap
            }
            RoadmapRequest::Interests { first, second } => {
                let found =
                    InterestResolver::new(interest_mappings()).resolve_detailed(first, second);
                info!(
                    "Interests ({}, {}) -> {} ({:?})",
                    first, second, found.target_skill, found.kind
                );
                lookup(found.target_skill).unwrap_or_else(|| {
                    warn!("Resolved skill '{}' is not in the catalog", found.target_skill);
                    default_roadmap()
                })
            }
        };

        Ok(roadmap)
    }

    /// Run one command against stdout
    pub async fn run(self, command: Commands) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(command, &mut out).await
    }

    /// Run one command, writing results to `out`
    pub async fn run_to<W: Write>(&self, command: Commands, out: &mut W) -> Result<()> {
        let format = self.config.output.format;

        match command {
            Commands::Skill { text } => {
                let request = RoadmapRequest::Skill(text.join(" "));
                let roadmap = self.generate(&request).await?;
                writeln!(out, "{}", render_roadmap(roadmap, format)?)?;
            }
            Commands::Interests { first, second } => {
                let request = RoadmapRequest::Interests { first, second };
                let roadmap = self.generate(&request).await?;
                writeln!(out, "{}", render_roadmap(roadmap, format)?)?;
            }
            Commands::List => {
                write!(out, "{}", render_catalog(catalog(), format)?)?;
            }
            Commands::Check => {
                let errors = integrity::check(catalog(), interest_mappings());
                for prerequisite in integrity::dangling_prerequisites(catalog()) {
                    writeln!(out, "warning: {}", prerequisite)?;
                }
                for error in &errors {
                    writeln!(out, "error: {}", error)?;
                }
                if !errors.is_empty() {
                    bail!("{} integrity violation(s) found", errors.len());
                }
                writeln!(
                    out,
                    "ok: {} roadmaps, {} interest mappings",
                    catalog().len(),
                    interest_mappings().len()
                )?;
            }
        }

        Ok(())
    }
}
