//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::{ClampPolicy, SyncMode};
use std::path::PathBuf;

/// ScrollSync - viewport synchronization for two side-by-side documents
#[derive(Parser, Debug)]
#[command(
    name = "scrollsync",
    author,
    version,
    about = "Viewport synchronization engine for parallel documents",
    long_about = "Keeps the scroll positions of two open documents mirrored while one of\n\
                  them is scrolled, for side-by-side comparison of parallel documents\n\
                  (e.g. a source text and its translation).\n\n\
                  This binary drives the engine against an in-memory mock host: `run`\n\
                  plays back a scroll sweep through a live session, `check` runs the\n\
                  structural-compatibility diagnostic on two document fixtures."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "SCROLLSYNC_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "SCROLLSYNC_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Path to the persisted key=value configuration file
    #[arg(long, global = true, env = "SCROLLSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Establish a sync session on the mock host and play back a scroll sweep
    Run(RunArgs),

    /// Run the structural-compatibility diagnostic on two document fixtures
    Check(CheckArgs),

    /// Display version and effective configuration
    Info(InfoArgs),
}

/// Log output format
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
            LogFormat::Json => observability::LogFormat::Json,
        }
    }
}

/// Sync mode selection
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ModeArg {
    /// Mirror the normalized scroll fraction
    Percentage,
    /// Mirror the raw scroll offset
    Absolute,
    /// Declared but unimplemented
    Heading,
    /// Declared but unimplemented
    Paragraph,
}

impl From<ModeArg> for SyncMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Percentage => SyncMode::Percentage,
            ModeArg::Absolute => SyncMode::AbsoluteValue,
            ModeArg::Heading => SyncMode::Heading,
            ModeArg::Paragraph => SyncMode::Paragraph,
        }
    }
}

/// Out-of-range write policy
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ClampArg {
    Clamp,
    Reject,
}

impl From<ClampArg> for ClampPolicy {
    fn from(policy: ClampArg) -> Self {
        match policy {
            ClampArg::Clamp => ClampPolicy::Clamp,
            ClampArg::Reject => ClampPolicy::Reject,
        }
    }
}

/// Arguments for the `run` command
#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    /// Sync mode for the session
    #[arg(short, long, value_enum, default_value = "percentage")]
    pub mode: ModeArg,

    /// Scroll maximum of the active (focused) document
    #[arg(long, default_value = "1000")]
    pub max_active: u32,

    /// Scroll maximum of the inactive document
    #[arg(long, default_value = "2000")]
    pub max_inactive: u32,

    /// Number of scroll steps in the playback sweep
    #[arg(long, default_value = "10")]
    pub steps: u32,

    /// Delay between scroll steps in milliseconds
    #[arg(long, default_value = "100")]
    pub interval_ms: u64,

    /// Policy for absolute writes outside the scroll range
    #[arg(long, value_enum, default_value = "clamp")]
    pub clamp: ClampArg,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "SCROLLSYNC_METRICS_PORT")]
    pub metrics_port: u16,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Left document fixture (`Style | text` per line)
    #[arg(long)]
    pub left: PathBuf,

    /// Right document fixture
    #[arg(long)]
    pub right: PathBuf,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mode_arg_maps_to_sync_mode() {
        assert_eq!(SyncMode::from(ModeArg::Percentage), SyncMode::Percentage);
        assert_eq!(SyncMode::from(ModeArg::Absolute), SyncMode::AbsoluteValue);
        assert!(!SyncMode::from(ModeArg::Heading).is_implemented());
    }
}
