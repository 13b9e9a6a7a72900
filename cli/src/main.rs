//! CLI entrypoint for Trivia Quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trivia_application::{AssembleQuestionsUseCase, FetchProgressNotifier, GameSession, NoProgress};
use trivia_infrastructure::{ConfigLoader, FileConfig, HtmlEntitySanitizer, OpenTdbQuestionBank};
use trivia_presentation::{Cli, ProgressReporter, SimpleProgress, TerminalConsole};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with the game on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let mut config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting Trivia Quorum");

    // === Dependency Injection ===
    if cli.concurrent {
        config.api.concurrent_fetch = true;
    }
    let params = config.fetch_params();

    let bank = OpenTdbQuestionBank::new(&config.api.base_url, params.timeout)
        .context("Failed to create question bank client")?
        .with_pacing(config.api.request_interval(), config.api.rate_limit_retries);
    let assembler =
        AssembleQuestionsUseCase::new(Arc::new(bank), Arc::new(HtmlEntitySanitizer::new()))
            .with_params(params);

    let mut session =
        GameSession::new(assembler, TerminalConsole::stdio()).with_progress(progress(&cli, &config));

    let completed = session.run().await?;
    info!("Session finished after {} game(s)", completed.len());

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn progress(cli: &Cli, config: &FileConfig) -> Arc<dyn FetchProgressNotifier> {
    if cli.quiet || !config.output.show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    }
}
