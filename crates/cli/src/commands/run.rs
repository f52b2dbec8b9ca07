//! `run` command implementation.

use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::playback::{Playback, PlaybackConfig};

/// Execute the `run` command
pub async fn run_playback(args: &RunArgs) -> Result<()> {
    if args.metrics_port != 0 {
        observability::init_metrics_only(args.metrics_port)?;
    }

    let playback_config = PlaybackConfig {
        mode: args.mode.into(),
        max_active: args.max_active,
        max_inactive: args.max_inactive,
        steps: args.steps,
        interval: Duration::from_millis(args.interval_ms),
        clamp: args.clamp.into(),
    };

    let playback = Playback::new(playback_config);

    let shutdown_signal = setup_shutdown_signal();

    info!("Starting playback...");

    tokio::select! {
        result = playback.run() => {
            match result {
                Ok(stats) => {
                    info!(
                        user_actions = stats.user_actions,
                        duration_secs = stats.duration.as_secs_f64(),
                        "Playback completed successfully"
                    );
                    stats.print_summary();
                }
                Err(e) => {
                    return Err(e).context("Playback execution failed");
                }
            }
        }
        _ = shutdown_signal => {
            warn!("Received shutdown signal, stopping playback...");
        }
    }

    info!("ScrollSync finished");
    Ok(())
}

/// Setup Ctrl+C and SIGTERM signal handlers
async fn setup_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
