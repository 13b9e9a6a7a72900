//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for trivia-quorum
#[derive(Parser, Debug)]
#[command(name = "trivia-quorum")]
#[command(author, version, about = "Multiple-choice trivia in your terminal")]
#[command(long_about = r#"
Trivia Quorum asks you multiple-choice questions fetched from Open Trivia DB.

You pick how many questions to play (5-50), a category group, and a
difficulty. Category groups span several Open Trivia DB categories; the
questions are split evenly across them and shuffled together.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./trivia.toml       Project-level config
3. ~/.config/trivia-quorum/config.toml   Global config

Example:
  trivia-quorum
  trivia-quorum --concurrent -v
  trivia-quorum --config ./offline.toml --no-color
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Fetch all categories of a group at once (needs request pacing
    /// disabled via api.min_request_interval_ms = 0)
    #[arg(long)]
    pub concurrent: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["trivia-quorum"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.concurrent);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "trivia-quorum",
            "-vv",
            "--quiet",
            "--no-color",
            "--concurrent",
            "--config",
            "game.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert!(cli.concurrent);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
    }
}
