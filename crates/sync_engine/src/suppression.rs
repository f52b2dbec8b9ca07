//! Feedback-loop suppression.
//!
//! Writing to the partner peer's viewport raises a change notification on
//! the partner's own listener, which targets the original peer. Without a
//! guard that is an unbounded ping-pong of writes. Both listeners of a
//! session share one `PropagationGuard`: a notification arriving while any
//! propagation of the session is in flight is ignored.
//!
//! Dispatch is single-threaded and re-entrant, so the guard is an explicit
//! guarded state transition (`Idle → Propagating → Idle`), not a locking
//! discipline. The token releases the guard on drop, so it resets even when
//! a propagation fails partway.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Per-session suppression flag shared by the listener pair.
#[derive(Clone, Default)]
pub struct PropagationGuard {
    propagating: Arc<AtomicBool>,
}

impl PropagationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a propagation.
    ///
    /// Returns `None` when a propagation is already in flight anywhere in
    /// the session — the caller must ignore the notification.
    pub fn enter(&self) -> Option<PropagationToken> {
        if self.propagating.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(PropagationToken {
            propagating: self.propagating.clone(),
        })
    }

    /// Whether a propagation is currently in flight.
    pub fn is_propagating(&self) -> bool {
        self.propagating.load(Ordering::SeqCst)
    }
}

/// Releases the guard on drop.
pub struct PropagationToken {
    propagating: Arc<AtomicBool>,
}

impl Drop for PropagationToken {
    fn drop(&mut self) {
        self.propagating.store(false, Ordering::SeqCst);
    }
}
