//! Mock viewport implementation
//!
//! Implements `ViewportAdapter` with in-memory state and synchronous
//! subscriber dispatch, reproducing the host behavior the engine must
//! survive: a `set_value` issued from inside a callback re-enters the other
//! subscribers before the outer call returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use contracts::{
    ChangeCallback, ScrollUnits, SubscriptionId, ViewportAdapter, ViewportChange,
};
use slab::Slab;
use tracing::trace;

/// In-memory scroll viewport.
pub struct MockViewport {
    maximum: ScrollUnits,
    value: Mutex<ScrollUnits>,
    subscribers: Mutex<Slab<ChangeCallback>>,
    write_count: AtomicU64,
}

impl MockViewport {
    /// Create a viewport with the given scroll range `[0, maximum]`.
    pub fn new(maximum: ScrollUnits) -> Self {
        Self {
            maximum,
            value: Mutex::new(0),
            subscribers: Mutex::new(Slab::new()),
            write_count: AtomicU64::new(0),
        }
    }

    /// Total number of `set_value` calls observed.
    ///
    /// Tests use this to assert the no-oscillation property: exactly one
    /// write per side per user action.
    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::SeqCst)
    }

    /// Number of installed subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().expect("subscriber lock").len()
    }

    fn notify(&self, change: ViewportChange) {
        // Snapshot the callbacks before invoking any of them: a callback may
        // re-enter subscribe/unsubscribe/set_value on this same viewport, and
        // holding the registry lock across the call would deadlock.
        let callbacks: Vec<ChangeCallback> = self
            .subscribers
            .lock()
            .expect("subscriber lock")
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        for callback in callbacks {
            callback(change);
        }
    }
}

impl ViewportAdapter for MockViewport {
    fn value(&self) -> ScrollUnits {
        *self.value.lock().expect("value lock")
    }

    fn set_value(&self, value: ScrollUnits) {
        self.write_count.fetch_add(1, Ordering::SeqCst);

        let changed = {
            let mut current = self.value.lock().expect("value lock");
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        };

        trace!(value, changed, "viewport write");

        // Same-value writes are silent, matching scrollbar behavior.
        if changed {
            self.notify(ViewportChange { value });
        }
    }

    fn maximum(&self) -> ScrollUnits {
        self.maximum
    }

    fn subscribe(&self, callback: ChangeCallback) -> SubscriptionId {
        let key = self
            .subscribers
            .lock()
            .expect("subscriber lock")
            .insert(callback);
        SubscriptionId(key)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        let mut subscribers = self.subscribers.lock().expect("subscriber lock");
        if subscribers.contains(id.0) {
            subscribers.remove(id.0);
        }
    }
}
