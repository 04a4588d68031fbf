use crate::cli::{Cli, OutputFormat};
use config::builder::DefaultState;
use config::{ConfigBuilder, FileFormat};
use roadmapper_logging::LogFormat;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Built-in defaults, the lowest configuration layer
const DEFAULT_CONFIG: &str = r#"
[logging]
level = "info"  # trace, debug, info, warn, error
format = "pretty"  # pretty, json

[generator]
delay_ms = 0  # Simulated latency before resolving

[output]
format = "text"  # text, json
"#;

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Get the global config path: ~/.roadmapper/roadmapper.toml
    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".roadmapper").join("roadmapper.toml"))
    }

    /// Load configuration with layered approach:
    /// 1. Built-in defaults
    /// 2. Global config: ~/.roadmapper/roadmapper.toml (optional)
    /// 3. Local override: ./roadmapper.toml (optional)
    /// 4. Environment variables (highest priority)
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file from current directory
        dotenvy::dotenv().ok();

        let mut config_builder = Self::defaults();

        // Layer 2: Global config
        if let Some(path) = Self::global_config_path() {
            config_builder = config_builder.add_source(config::File::from(path).required(false));
        }

        config_builder = config_builder
            // Layer 3: Local workspace config (optional override)
            .add_source(config::File::with_name("roadmapper").required(false))
            // Layer 4: Environment variables with ROADMAPPER__ prefix
            .add_source(
                config::Environment::with_prefix("ROADMAPPER")
                    .separator("__")
                    .try_parsing(true),
            );

        // Convenience override for the log level
        if let Ok(level) = env::var("ROADMAPPER_LOG") {
            config_builder = config_builder.set_override("logging.level", level)?;
        }

        Self::from_builder(config_builder)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn from_builder(config_builder: ConfigBuilder<DefaultState>) -> anyhow::Result<Self> {
        let config = config_builder.build()?;
        let config: Self = config.try_deserialize()?;
        Ok(config)
    }

    /// Command-line flags win over every file and environment layer
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.verbose {
            self.logging.level = "debug".to_string();
        }

        if let Some(format) = cli.format {
            self.output.format = format;
        }

        if let Some(delay_ms) = cli.delay_ms {
            self.generator.delay_ms = delay_ms;
        }
    }
}
