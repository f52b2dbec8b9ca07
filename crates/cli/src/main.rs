//! # ScrollSync CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Persisted key=value configuration loading
//! - Mock-host playback of a live sync session
//! - Structural-compatibility diagnostics for document fixtures

mod cli;
mod commands;
mod playback;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::{Cli, Commands};
use commands::{run_check, run_info, run_playback};
use contracts::SyncConfig;
use observability::ObservabilityConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = load_persisted_config(&cli)?;
    init_logging(&cli, &config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "ScrollSync CLI starting"
    );

    let result = match &cli.command {
        Commands::Run(args) => run_playback(args).await,
        Commands::Check(args) => run_check(args),
        Commands::Info(args) => run_info(args, &cli, &config),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

/// Load the persisted configuration file named by `--config`, if any.
fn load_persisted_config(cli: &Cli) -> Result<SyncConfig> {
    match &cli.config {
        Some(path) => {
            let config = config_loader::ConfigLoader::load_from_path(path)?;
            Ok(config)
        }
        None => Ok(SyncConfig::default()),
    }
}

/// Initialize logging from CLI flags; the persisted `LOG_LEVEL` key supplies
/// the default when no verbosity flag is given. `RUST_LOG` always wins.
fn init_logging(cli: &Cli, config: &SyncConfig) -> Result<()> {
    let default_log_level = if cli.quiet {
        "warn".to_string()
    } else {
        match cli.verbose {
            0 => observability::default_level_from(config),
            1 => "debug".to_string(),
            _ => "trace".to_string(),
        }
    };

    observability::init_with_config(ObservabilityConfig {
        log_format: cli.log_format.into(),
        metrics_port: None,
        default_log_level,
    })
}
