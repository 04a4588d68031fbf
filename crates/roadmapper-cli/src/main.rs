mod cli;
mod config;
mod render;
mod service;

use anyhow::Result;
use clap::Parser;
use crate::cli::Cli;
use crate::config::Config;
use crate::service::RoadmapService;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, flags win
    let mut config = Config::load()?;
    config.apply_cli(&cli);

    roadmapper_logging::init_logging(&config.logging.level, config.logging.format)?;
    tracing::debug!("Running with {:?}", config);

    // Create and run the roadmap service
    let service = RoadmapService::new(config);
    service.run(cli.command).await
}
