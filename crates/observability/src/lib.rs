//! # Observability
//!
//! Tracing initialization and optional Prometheus metrics export.
//!
//! The engine itself records counters through the `metrics` macros
//! (propagations, suppressed notifications, listener errors, sessions);
//! installing the Prometheus recorder here makes them scrapeable. The
//! persisted `LOG_LEVEL` config key feeds the default filter; `RUST_LOG`
//! always wins.
//!
//! ## Usage
//!
//! ```ignore
//! let config = ObservabilityConfig {
//!     default_log_level: "debug".to_string(),
//!     ..Default::default()
//! };
//! observability::init_with_config(config)?;
//! ```

use anyhow::{Context, Result};
use contracts::SyncConfig;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log output format
    pub log_format: LogFormat,
    /// Prometheus port (None = disabled)
    pub metrics_port: Option<u16>,
    /// Default log level (overridden by RUST_LOG)
    pub default_log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            metrics_port: None,
            default_log_level: "info".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable multi-line format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
    /// JSON structured logs
    Json,
}

/// The default filter directive for a loaded persisted configuration.
///
/// A file without a `LOG_LEVEL` key falls back to `info`.
pub fn default_level_from(config: &SyncConfig) -> String {
    config
        .log_level
        .map(|level| level.as_filter_directive().to_string())
        .unwrap_or_else(|| "info".to_string())
}

/// Initialize observability with defaults.
pub fn init() -> Result<()> {
    init_with_config(ObservabilityConfig::default())
}

/// Initialize tracing (and Prometheus, if a port is configured).
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_level));

    let fmt_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    if let Some(port) = config.metrics_port {
        install_prometheus(port)?;
    }

    tracing::debug!(
        log_format = ?config.log_format,
        metrics_port = ?config.metrics_port,
        "observability initialized"
    );

    Ok(())
}

/// Install only the Prometheus recorder (tracing already initialized).
pub fn init_metrics_only(port: u16) -> Result<()> {
    install_prometheus(port)
}

fn install_prometheus(port: u16) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .context("Failed to install Prometheus recorder")?;

    tracing::info!(port, "Prometheus metrics endpoint initialized");
    Ok(())
}
