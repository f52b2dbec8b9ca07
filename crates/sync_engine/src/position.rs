//! Per-peer position model.
//!
//! Wraps one peer's viewport adapter and converts between the two position
//! representations. All range handling lives here; listeners never touch raw
//! adapter arithmetic.

use std::sync::Arc;

use contracts::{
    absolute_to_relative, relative_to_absolute, ClampPolicy, Peer, PeerId, ScrollUnits,
    SyncError, ViewportAdapter,
};
use tracing::trace;

/// Position accessor pair for one peer.
#[derive(Clone)]
pub struct PositionModel {
    peer: PeerId,
    viewport: Arc<dyn ViewportAdapter>,
    clamp: ClampPolicy,
}

impl PositionModel {
    pub fn new(peer: &Peer, clamp: ClampPolicy) -> Self {
        Self {
            peer: peer.id.clone(),
            viewport: peer.viewport.clone(),
            clamp,
        }
    }

    /// The peer this model reads and writes.
    pub fn peer(&self) -> &PeerId {
        &self.peer
    }

    /// Upper bound of the peer's scroll range.
    pub fn maximum(&self) -> ScrollUnits {
        self.viewport.maximum()
    }

    /// Current scroll offset.
    pub fn absolute(&self) -> ScrollUnits {
        self.viewport.value()
    }

    /// Current position as a fraction of the scroll range, rounded to
    /// hundredths.
    ///
    /// # Errors
    /// `DocumentTooShort` when the scroll maximum is zero; a zero range never
    /// reads as "0%".
    pub fn relative(&self) -> Result<f64, SyncError> {
        absolute_to_relative(self.absolute(), self.maximum()).ok_or_else(|| {
            SyncError::DocumentTooShort {
                peer: self.peer.clone(),
            }
        })
    }

    /// Write a raw scroll offset.
    ///
    /// Values above the maximum are clamped or rejected per the configured
    /// `ClampPolicy`.
    pub fn set_absolute(&self, value: ScrollUnits) -> Result<(), SyncError> {
        let max = self.maximum();
        let value = if value > max {
            match self.clamp {
                ClampPolicy::Clamp => {
                    trace!(peer = %self.peer, value, max, "clamping absolute write");
                    max
                }
                ClampPolicy::Reject => {
                    return Err(SyncError::PositionOutOfRange { value, max });
                }
            }
        } else {
            value
        };

        self.viewport.set_value(value);
        Ok(())
    }

    /// Write a position as a fraction of the scroll range.
    ///
    /// The fraction is clamped into `[0, 1]` (partner fractions are always
    /// in-domain; the clamp covers direct callers), then truncated to units.
    ///
    /// # Errors
    /// `DocumentTooShort` when the scroll maximum is zero.
    pub fn set_relative(&self, fraction: f64) -> Result<(), SyncError> {
        let max = self.maximum();
        if max == 0 {
            return Err(SyncError::DocumentTooShort {
                peer: self.peer.clone(),
            });
        }

        let fraction = fraction.clamp(0.0, 1.0);
        self.set_absolute(relative_to_absolute(fraction, max))
    }
}
