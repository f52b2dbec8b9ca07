//! Engine and diagnostic configuration values.
//!
//! Configuration is passed explicitly into the controller's constructor;
//! there is no process-wide mutable configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SyncError;

/// Policy for absolute writes outside the viewport's `[0, max]` range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Clamp the value into range before writing (what a scrollbar does with
    /// an overshooting drag)
    #[default]
    Clamp,
    /// Fail the write with `PositionOutOfRange`
    Reject,
}

/// Configuration for the sync engine, passed to `SyncController::new`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Out-of-range handling for absolute writes
    #[serde(default)]
    pub clamp: ClampPolicy,
}

/// Diagnostic log level from the persisted configuration file.
///
/// Affects only diagnostic verbosity, never synchronization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The tracing filter directive this level maps to.
    ///
    /// Tracing has no level above `error`, so `Critical` also maps there.
    pub fn as_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(SyncError::config_validation(
                "LOG_LEVEL",
                format!("unrecognized level '{other}'"),
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        };
        write!(f, "{s}")
    }
}

/// Parsed persisted configuration (the optional key=value file).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Diagnostic verbosity, if the file sets one
    pub log_level: Option<LogLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("CRITICAL".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        // Case-sensitive, as the file format is
        assert!("debug".parse::<LogLevel>().is_err());
        assert!("VERBOSE".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_filter_directives() {
        assert_eq!(LogLevel::Warning.as_filter_directive(), "warn");
        assert_eq!(LogLevel::Critical.as_filter_directive(), "error");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(EngineConfig::default().clamp, ClampPolicy::Clamp);
        assert_eq!(SyncConfig::default().log_level, None);
    }
}
