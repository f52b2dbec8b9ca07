//! # Config Loader
//!
//! Loads the optional persisted configuration file: a plain key=value text
//! file controlling diagnostic verbosity only. Synchronization behavior is
//! never configured here.
//!
//! Recognized keys:
//! - `LOG_LEVEL` ∈ {DEBUG, INFO, WARNING, ERROR, CRITICAL}
//!
//! Unrecognized keys are warned about and ignored; an unrecognized value for
//! a recognized key is a validation error.
//!
//! # Example
//!
//! ```
//! use config_loader::ConfigLoader;
//!
//! let config = ConfigLoader::load_from_str("# comment\nLOG_LEVEL=DEBUG\n").unwrap();
//! assert!(config.log_level.is_some());
//! ```

mod parser;

pub use parser::Entry;

use contracts::{SyncConfig, SyncError};
use std::path::Path;
use tracing::warn;

/// Configuration loader
///
/// Provides static methods to load configuration from a file or a string.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file path.
    ///
    /// # Errors
    /// - File read failure
    /// - Validation failure (recognized key with unrecognized value)
    pub fn load_from_path(path: &Path) -> Result<SyncConfig, SyncError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    /// Load configuration from string content.
    pub fn load_from_str(content: &str) -> Result<SyncConfig, SyncError> {
        let mut config = SyncConfig::default();

        for entry in parser::parse(content) {
            match entry.key.as_str() {
                "LOG_LEVEL" => {
                    config.log_level = Some(entry.value.parse()?);
                }
                other => {
                    warn!(key = other, line = entry.line, "ignoring unrecognized config key");
                }
            }
        }

        Ok(config)
    }
}
