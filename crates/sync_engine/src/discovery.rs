//! Peer discovery.
//!
//! Enumerates the host's open documents, keeps only text documents, and
//! requires exactly two. The focused one becomes the active peer, the other
//! the inactive peer. Anything else is a setup error the caller must surface
//! to the user — discovery never silently picks two of many.

use std::sync::Arc;

use contracts::{DocumentHandle, HostApp, Peer, SyncError};
use tracing::debug;

/// The ordered peer pair of a session. `active.id != inactive.id` always.
#[derive(Debug, Clone)]
pub struct PeerPair {
    /// The document currently focused in the host
    pub active: Peer,
    /// The other document
    pub inactive: Peer,
}

/// Discover the two sync peers.
///
/// # Errors
/// - `PeerCount` unless exactly two open documents are text documents
/// - `ActiveDocumentUnknown` when the host focus is not one of the two
/// - `AdapterLookup` when a peer's scroll control cannot be resolved
pub fn discover(host: &dyn HostApp) -> Result<PeerPair, SyncError> {
    let text_docs: Vec<Arc<dyn DocumentHandle>> = host
        .open_documents()
        .into_iter()
        .filter(|doc| doc.is_text_document())
        .collect();

    if text_docs.len() != 2 {
        return Err(SyncError::PeerCount {
            found: text_docs.len(),
        });
    }

    let focused = host
        .focused_document()
        .ok_or(SyncError::ActiveDocumentUnknown)?;

    let active_index = text_docs
        .iter()
        .position(|doc| doc.id() == focused)
        .ok_or(SyncError::ActiveDocumentUnknown)?;

    // Resolve both viewports before returning: a failure here must abort
    // setup with nothing installed.
    let active = build_peer(&text_docs[active_index])?;
    let inactive = build_peer(&text_docs[1 - active_index])?;

    debug!(
        active = %active.id,
        inactive = %inactive.id,
        "discovered sync peers"
    );

    Ok(PeerPair { active, inactive })
}

fn build_peer(document: &Arc<dyn DocumentHandle>) -> Result<Peer, SyncError> {
    Ok(Peer {
        id: document.id(),
        title: document.title(),
        viewport: document.viewport()?,
        document: document.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use host_adapter::{MockDocument, MockHost};

    fn host_with_two_docs() -> MockHost {
        let host = MockHost::new();
        host.add_document(MockDocument::text("a", "A.odt", 1000));
        host.add_document(MockDocument::text("b", "B.odt", 1000));
        host.focus("a");
        host
    }

    #[test]
    fn test_exactly_two_returns_ordered_pair() {
        let host = host_with_two_docs();
        let pair = discover(&host).unwrap();
        assert_eq!(pair.active.id, "a");
        assert_eq!(pair.inactive.id, "b");
        assert_ne!(pair.active.id, pair.inactive.id);
    }

    #[test]
    fn test_focus_selects_active() {
        let host = host_with_two_docs();
        host.focus("b");
        let pair = discover(&host).unwrap();
        assert_eq!(pair.active.id, "b");
        assert_eq!(pair.inactive.id, "a");
    }

    #[test]
    fn test_zero_one_or_three_documents_fail() {
        let host = MockHost::new();
        assert!(matches!(
            discover(&host),
            Err(SyncError::PeerCount { found: 0 })
        ));

        host.add_document(MockDocument::text("a", "A.odt", 100));
        host.focus("a");
        assert!(matches!(
            discover(&host),
            Err(SyncError::PeerCount { found: 1 })
        ));

        host.add_document(MockDocument::text("b", "B.odt", 100));
        host.add_document(MockDocument::text("c", "C.odt", 100));
        assert!(matches!(
            discover(&host),
            Err(SyncError::PeerCount { found: 3 })
        ));
    }

    #[test]
    fn test_non_text_documents_are_filtered() {
        let host = host_with_two_docs();
        host.add_document(MockDocument::non_text("sheet", "Budget.ods"));
        // Still exactly two qualifying peers
        let pair = discover(&host).unwrap();
        assert_eq!(pair.active.id, "a");
    }

    #[test]
    fn test_unfocused_host_fails() {
        let host = host_with_two_docs();
        host.blur();
        assert!(matches!(
            discover(&host),
            Err(SyncError::ActiveDocumentUnknown)
        ));
    }

    #[test]
    fn test_focus_outside_pair_fails() {
        let host = host_with_two_docs();
        host.add_document(MockDocument::non_text("sheet", "Budget.ods"));
        host.focus("sheet");
        assert!(matches!(
            discover(&host),
            Err(SyncError::ActiveDocumentUnknown)
        ));
    }

    #[test]
    fn test_viewport_failure_aborts() {
        let host = MockHost::new();
        host.add_document(MockDocument::text("a", "A.odt", 100));
        host.add_document(MockDocument::text("b", "B.odt", 100).without_viewport());
        host.focus("a");
        assert!(matches!(
            discover(&host),
            Err(SyncError::AdapterLookup { .. })
        ));
    }
}
