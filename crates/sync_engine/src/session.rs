//! A live sync session: two peers wired together by a listener pair.

use std::fmt;
use std::sync::{Arc, Mutex};

use contracts::{EngineConfig, Peer, SubscriptionId, SyncMode, ViewportAdapter};
use tracing::{debug, info};

use crate::{ChangeListener, PeerPair, PositionModel, PropagationGuard};

/// One established synchronization session.
///
/// Created by `SyncController::trigger`; torn down by `detach` (or drop).
/// Always holds exactly two distinct peers.
pub struct SyncSession {
    mode: SyncMode,
    active: Peer,
    inactive: Peer,
    guard: PropagationGuard,
    subscriptions: Mutex<Vec<(Arc<dyn ViewportAdapter>, SubscriptionId)>>,
}

impl fmt::Debug for SyncSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncSession")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl SyncSession {
    /// Build the listener pair and install it on both peers' viewports.
    ///
    /// Infallible by construction: both viewports were already resolved
    /// during discovery, so there is no failure path that could leave a
    /// half-installed pair.
    pub fn install(mode: SyncMode, pair: PeerPair, config: EngineConfig) -> Self {
        let PeerPair { active, inactive } = pair;

        let guard = PropagationGuard::new();
        let active_model = PositionModel::new(&active, config.clamp);
        let inactive_model = PositionModel::new(&inactive, config.clamp);

        // Each listener targets the *other* peer; both share the session guard.
        let forward = ChangeListener::new(
            mode,
            active_model.clone(),
            inactive_model.clone(),
            guard.clone(),
        );
        let backward = ChangeListener::new(mode, inactive_model, active_model, guard.clone());

        let subscriptions = vec![
            (active.viewport.clone(), active.viewport.subscribe(forward.into_callback())),
            (
                inactive.viewport.clone(),
                inactive.viewport.subscribe(backward.into_callback()),
            ),
        ];

        info!(
            mode = %mode,
            active = %active.id,
            inactive = %inactive.id,
            "sync session installed"
        );

        Self {
            mode,
            active,
            inactive,
            guard,
            subscriptions: Mutex::new(subscriptions),
        }
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    pub fn active(&self) -> &Peer {
        &self.active
    }

    pub fn inactive(&self) -> &Peer {
        &self.inactive
    }

    /// The session's suppression guard (inspectable for diagnostics).
    pub fn guard(&self) -> &PropagationGuard {
        &self.guard
    }

    /// Whether the listener pair is still installed.
    pub fn is_attached(&self) -> bool {
        !self.subscriptions.lock().expect("subscription lock").is_empty()
    }

    /// Remove both listeners from their viewports.
    ///
    /// Idempotent; safe to call any number of times.
    pub fn detach(&self) {
        let drained: Vec<_> = self
            .subscriptions
            .lock()
            .expect("subscription lock")
            .drain(..)
            .collect();

        if drained.is_empty() {
            return;
        }

        for (viewport, id) in drained {
            viewport.unsubscribe(id);
        }
        debug!(mode = %self.mode, "sync session detached");
    }
}

impl Drop for SyncSession {
    fn drop(&mut self) {
        self.detach();
    }
}
