//! Layered error definitions
//!
//! Categorized by source: discovery / position / host / compatibility / config

use thiserror::Error;

use crate::{PeerId, ScrollUnits};

/// Unified error type
#[derive(Debug, Error)]
pub enum SyncError {
    // ===== Discovery Errors =====
    /// Not exactly two qualifying text documents are open
    #[error("exactly two open text documents are required, found {found}")]
    PeerCount { found: usize },

    /// The focused document is not one of the two qualifying peers
    #[error("cannot determine the active document: host focus is not a sync peer")]
    ActiveDocumentUnknown,

    // ===== Position Errors =====
    /// A peer's scroll maximum is zero; no fraction can be computed
    #[error("document '{peer}' is too short to scroll (maximum is 0)")]
    DocumentTooShort { peer: PeerId },

    /// An absolute write outside `[0, max]` under the `Reject` clamp policy
    #[error("position {value} is outside the scroll range [0, {max}]")]
    PositionOutOfRange { value: ScrollUnits, max: ScrollUnits },

    // ===== Host Errors =====
    /// The viewport/scroll control could not be located for a document
    #[error("cannot locate the scroll control of '{peer}': {message}")]
    AdapterLookup { peer: PeerId, message: String },

    // ===== Compatibility Errors =====
    /// Structural-mode precondition failed; non-fatal, structural sync refused
    #[error("documents diverge structurally at paragraph {index}")]
    CompatibilityMismatch { index: usize },

    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse { message: String },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl SyncError {
    /// Create an adapter lookup error
    pub fn adapter_lookup(peer: impl Into<PeerId>, message: impl Into<String>) -> Self {
        Self::AdapterLookup {
            peer: peer.into(),
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create a configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error aborts session setup (vs. a non-fatal diagnostic).
    pub fn is_fatal_for_setup(&self) -> bool {
        !matches!(self, Self::CompatibilityMismatch { .. })
    }
}
