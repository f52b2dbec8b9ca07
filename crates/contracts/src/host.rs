//! Host-collaborator traits - the engine's only view of the host application.
//!
//! The engine never traverses a UI tree; everything host-specific (document
//! enumeration, accessibility lookup of the scroll control, modal alerts)
//! lives behind these traits. Tests and the CLI substitute the mock
//! implementations from `host_adapter`.

use std::fmt;
use std::sync::Arc;

use crate::{Paragraph, PeerId, ScrollUnits, SyncError};

/// A change notification from a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportChange {
    /// The scroll offset after the change
    pub value: ScrollUnits,
}

/// Viewport change callback type.
///
/// `Arc` so a callback can be shared across subscription registries.
/// Notifications are delivered synchronously on the host's single dispatch
/// thread; a `set_value` issued from inside a callback synchronously
/// re-enters the other subscribers of the written viewport.
pub type ChangeCallback = Arc<dyn Fn(ViewportChange) + Send + Sync>;

/// Handle identifying one installed change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub usize);

/// Scrollable viewport of one peer document.
///
/// Abstracts the host's scroll control (in the original host, an
/// accessibility-tree scrollbar object).
pub trait ViewportAdapter: Send + Sync {
    /// Current scroll offset.
    fn value(&self) -> ScrollUnits;

    /// Write a raw scroll offset.
    ///
    /// The adapter accepts any value the host accepts; range policy is the
    /// engine's concern (see `ClampPolicy`). Subscribers are notified
    /// synchronously if the stored value changes.
    fn set_value(&self, value: ScrollUnits);

    /// Upper bound of the scroll range.
    fn maximum(&self) -> ScrollUnits;

    /// Install a change callback. Returns a handle for removal.
    fn subscribe(&self, callback: ChangeCallback) -> SubscriptionId;

    /// Remove a previously installed callback.
    ///
    /// Idempotent; unknown ids are ignored.
    fn unsubscribe(&self, id: SubscriptionId);
}

impl fmt::Debug for dyn ViewportAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportAdapter").finish_non_exhaustive()
    }
}

/// One open document of the host application.
pub trait DocumentHandle: Send + Sync {
    /// Stable document identifier.
    fn id(&self) -> PeerId;

    /// Window/document title.
    fn title(&self) -> String;

    /// Capability filter: only text documents qualify as sync peers.
    fn is_text_document(&self) -> bool;

    /// Ordered paragraph sequence of the document.
    fn paragraphs(&self) -> Result<Vec<Paragraph>, SyncError>;

    /// Locate the document's vertical scroll control.
    ///
    /// # Errors
    /// `SyncError::AdapterLookup` when the host cannot find the control.
    fn viewport(&self) -> Result<Arc<dyn ViewportAdapter>, SyncError>;
}

/// Alert severity for the host's modal message surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// The host application itself.
pub trait HostApp: Send + Sync {
    /// Enumerate all currently open document handles.
    fn open_documents(&self) -> Vec<Arc<dyn DocumentHandle>>;

    /// The host's notion of the currently focused document, if any.
    fn focused_document(&self) -> Option<PeerId>;

    /// Show a modal user-visible alert. Fire-and-forget.
    fn alert(&self, message: &str, severity: Severity);
}
