//! The change-listener half of a session.
//!
//! One listener per peer, bound to the partner as propagation target. On a
//! change notification it reads its own peer with the mode's getter and
//! writes the partner with the mode's setter — unless the session's
//! suppression guard reports a propagation already in flight, in which case
//! the notification is the echo of our own write and is ignored.
//!
//! Errors inside a propagation are caught here, at the callback boundary:
//! logged, counted, degraded to a no-op for that single notification. They
//! never escape into the host's dispatch loop.

use std::sync::Arc;

use contracts::{ChangeCallback, Position, SyncError, SyncMode, ViewportChange};
use tracing::{debug, trace, warn};

use crate::{PositionModel, PropagationGuard};

/// Forwards one peer's position changes to its partner.
pub struct ChangeListener {
    mode: SyncMode,
    source: PositionModel,
    target: PositionModel,
    guard: PropagationGuard,
}

impl ChangeListener {
    /// Bind a listener to its source peer and propagation target.
    ///
    /// `guard` must be the session-wide guard shared with the partner's
    /// listener.
    pub fn new(
        mode: SyncMode,
        source: PositionModel,
        target: PositionModel,
        guard: PropagationGuard,
    ) -> Self {
        Self {
            mode,
            source,
            target,
            guard,
        }
    }

    /// Handle a change notification from the source peer's viewport.
    pub fn on_change(&self, change: ViewportChange) {
        let Some(_token) = self.guard.enter() else {
            // Echo of a propagation already in flight for this session.
            trace!(
                source = %self.source.peer(),
                value = change.value,
                "suppressed re-entrant notification"
            );
            metrics::counter!("sync_notifications_suppressed_total").increment(1);
            return;
        };

        match self.propagate() {
            Ok(position) => {
                debug!(
                    source = %self.source.peer(),
                    target = %self.target.peer(),
                    mode = %self.mode,
                    %position,
                    "propagated position"
                );
                metrics::counter!(
                    "sync_propagations_total",
                    "mode" => self.mode.to_string()
                )
                .increment(1);
            }
            Err(error) => {
                warn!(
                    source = %self.source.peer(),
                    target = %self.target.peer(),
                    mode = %self.mode,
                    %error,
                    "propagation failed, dropping notification"
                );
                metrics::counter!("sync_listener_errors_total").increment(1);
            }
        }
    }

    fn propagate(&self) -> Result<Position, SyncError> {
        match self.mode {
            SyncMode::Percentage => {
                let fraction = self.source.relative()?;
                self.target.set_relative(fraction)?;
                Ok(Position::RelativeFraction(fraction))
            }
            SyncMode::AbsoluteValue => {
                let value = self.source.absolute();
                self.target.set_absolute(value)?;
                Ok(Position::AbsoluteUnits(value))
            }
            // Declared but unimplemented modes never get listeners installed;
            // if one ever does, the notification is a deliberate no-op.
            SyncMode::Heading | SyncMode::Paragraph => {
                debug!(mode = %self.mode, "structural mode is a no-op");
                Ok(Position::AbsoluteUnits(self.source.absolute()))
            }
        }
    }

    /// Wrap the listener as a viewport change callback.
    pub fn into_callback(self) -> ChangeCallback {
        let listener = Arc::new(self);
        Arc::new(move |change| listener.on_change(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{ClampPolicy, DocumentHandle, Peer, ViewportAdapter};
    use host_adapter::MockDocument;

    fn peer(id: &str, max: u32) -> Peer {
        let doc = MockDocument::text(id, format!("{id}.odt"), max);
        Peer {
            id: doc.id(),
            title: doc.title(),
            viewport: doc.viewport().unwrap(),
            document: Arc::new(doc),
        }
    }

    fn model(peer: &Peer) -> PositionModel {
        PositionModel::new(peer, ClampPolicy::Clamp)
    }

    #[test]
    fn test_percentage_propagation() {
        let a = peer("a", 1000);
        let b = peer("b", 2000);
        let guard = PropagationGuard::new();
        let listener = ChangeListener::new(
            SyncMode::Percentage,
            model(&a),
            model(&b),
            guard,
        );

        a.viewport.set_value(500);
        listener.on_change(ViewportChange { value: 500 });

        assert_eq!(b.viewport.value(), 1000); // 0.50 of 2000
    }

    #[test]
    fn test_absolute_propagation() {
        let a = peer("a", 200);
        let b = peer("b", 200);
        let listener = ChangeListener::new(
            SyncMode::AbsoluteValue,
            model(&a),
            model(&b),
            PropagationGuard::new(),
        );

        a.viewport.set_value(150);
        listener.on_change(ViewportChange { value: 150 });

        assert_eq!(b.viewport.value(), 150);
    }

    #[test]
    fn test_suppressed_notification_writes_nothing() {
        let a = peer("a", 1000);
        let b = peer("b", 1000);
        let guard = PropagationGuard::new();
        let listener = ChangeListener::new(
            SyncMode::Percentage,
            model(&a),
            model(&b),
            guard.clone(),
        );

        a.viewport.set_value(500);
        let _token = guard.enter().unwrap();
        listener.on_change(ViewportChange { value: 500 });

        assert_eq!(b.viewport.value(), 0);
    }

    #[test]
    fn test_propagation_error_is_swallowed() {
        let a = peer("a", 0); // relative() fails: DocumentTooShort
        let b = peer("b", 1000);
        let guard = PropagationGuard::new();
        let listener = ChangeListener::new(
            SyncMode::Percentage,
            model(&a),
            model(&b),
            guard.clone(),
        );

        // Must not panic, must not write, must release the guard.
        listener.on_change(ViewportChange { value: 0 });
        assert_eq!(b.viewport.value(), 0);
        assert!(!guard.is_propagating());
    }
}
