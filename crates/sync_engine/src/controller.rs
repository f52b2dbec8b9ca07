//! Top-level orchestrator.
//!
//! Validates the requested mode, runs peer discovery, builds the session and
//! installs the listener pair. Setup errors are surfaced exactly once
//! through the host's alert surface and abort with nothing installed. After
//! a successful `trigger` the engine is entirely reactive.

use std::sync::Arc;

use contracts::{
    CompatibilityResult, EngineConfig, HostApp, Severity, SyncError, SyncMode,
};
use tracing::{info, warn};

use crate::{compat, discovery, SyncSession};

/// Orchestrates session lifecycle against one host application.
pub struct SyncController {
    host: Arc<dyn HostApp>,
    config: EngineConfig,
    session: Option<SyncSession>,
}

impl SyncController {
    /// Create a controller. Configuration is explicit — there is no global
    /// mutable state behind this.
    pub fn new(host: Arc<dyn HostApp>, config: EngineConfig) -> Self {
        Self {
            host,
            config,
            session: None,
        }
    }

    /// Establish a sync session in the given mode.
    ///
    /// Any previous session is torn down first, so re-triggering never
    /// stacks listener pairs on the same peers.
    ///
    /// Declared-but-unimplemented modes (`Heading`, `Paragraph`) are
    /// accepted, reported to the user, and produce no session (`Ok(None)`).
    ///
    /// # Errors
    /// Discovery failures (`PeerCount`, `ActiveDocumentUnknown`,
    /// `AdapterLookup`) are surfaced once via the host alert and returned;
    /// nothing is installed in that case.
    pub fn trigger(&mut self, mode: SyncMode) -> Result<Option<&SyncSession>, SyncError> {
        if !mode.is_implemented() {
            warn!(mode = %mode, "requested sync mode is not implemented");
            self.host.alert(
                &format!("{} is not implemented yet.", mode.command_name()),
                Severity::Info,
            );
            return Ok(None);
        }

        self.disable();

        let pair = match discovery::discover(self.host.as_ref()) {
            Ok(pair) => pair,
            Err(error) => {
                self.host.alert(&error.to_string(), Severity::Error);
                return Err(error);
            }
        };

        let session = SyncSession::install(mode, pair, self.config);
        metrics::counter!("sync_sessions_total", "mode" => mode.to_string()).increment(1);

        self.session = Some(session);
        Ok(self.session.as_ref())
    }

    /// Tear down the current session, if any.
    ///
    /// Idempotent and safe with no active session.
    pub fn disable(&mut self) {
        if let Some(session) = self.session.take() {
            session.detach();
            info!(mode = %session.mode(), "sync disabled");
        }
    }

    /// The current session, if one is established.
    pub fn session(&self) -> Option<&SyncSession> {
        self.session.as_ref()
    }

    /// Structural-compatibility diagnostic for the current peer pair.
    ///
    /// Discovers peers (same user-visible failure handling as `trigger`),
    /// fetches both paragraph-style sequences lazily and compares them. A
    /// mismatch is a non-fatal result, not an error.
    pub fn check_compatibility(&self) -> Result<CompatibilityResult, SyncError> {
        let pair = match discovery::discover(self.host.as_ref()) {
            Ok(pair) => pair,
            Err(error) => {
                self.host.alert(&error.to_string(), Severity::Error);
                return Err(error);
            }
        };

        let active_styles = pair.active.paragraph_styles()?;
        let inactive_styles = pair.inactive.paragraph_styles()?;
        let result = compat::check_styles(&active_styles, &inactive_styles);

        if !result.compatible {
            let index = result.first_mismatch.unwrap_or(0);
            self.host.alert(
                &format!(
                    "Documents are not compatible: paragraph styles diverge at paragraph {index}."
                ),
                Severity::Warning,
            );
        }

        Ok(result)
    }
}

impl Drop for SyncController {
    fn drop(&mut self) {
        self.disable();
    }
}
