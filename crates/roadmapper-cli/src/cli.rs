use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Output mode shared by all commands.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level CLI parser for the `roadmapper` binary.
#[derive(Debug, Parser)]
#[command(
    name = "roadmapper",
    version,
    about = "Roadmapper - curated learning paths from a skill or two interests"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json (overrides config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Simulated generation latency in milliseconds (overrides config)
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Recommend a roadmap for a skill you want to develop
    Skill {
        /// Skill phrase, e.g. "Web Development"
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Recommend a roadmap from two interests
    Interests {
        /// First interest, e.g. "Art"
        first: String,
        /// Second interest, e.g. "Technology"
        second: String,
    },

    /// List the curated roadmaps
    List,

    /// Check the curated data for integrity problems
    Check,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn skill_words_are_collected() {
        let cli = Cli::try_parse_from(["roadmapper", "skill", "data", "science"])
            .expect("cli should parse");

        match cli.command {
            Commands::Skill { text } => assert_eq!(text, vec!["data", "science"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "roadmapper",
            "interests",
            "art",
            "technology",
            "--format",
            "json",
            "--delay-ms",
            "1500",
            "-v",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.delay_ms, Some(1500));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Interests { .. }));
    }

    #[test]
    fn interests_require_two_values() {
        assert!(Cli::try_parse_from(["roadmapper", "interests", "art"]).is_err());
    }

    #[test]
    fn skill_requires_text() {
        assert!(Cli::try_parse_from(["roadmapper", "skill"]).is_err());
    }
}
