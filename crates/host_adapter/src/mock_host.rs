//! Mock host application
//!
//! Implements `HostApp` over a list of mock documents, a settable focus, and
//! a recorded alert surface that tests can inspect.

use std::sync::{Arc, Mutex};

use contracts::{DocumentHandle, HostApp, PeerId, Severity};
use tracing::debug;

use crate::MockDocument;

/// In-memory host application.
#[derive(Default)]
pub struct MockHost {
    documents: Mutex<Vec<Arc<MockDocument>>>,
    focused: Mutex<Option<PeerId>>,
    alerts: Mutex<Vec<(String, Severity)>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a document in the host. Returns the shared handle.
    pub fn add_document(&self, document: MockDocument) -> Arc<MockDocument> {
        let document = Arc::new(document);
        self.documents
            .lock()
            .expect("document lock")
            .push(document.clone());
        document
    }

    /// Set the focused document.
    pub fn focus(&self, id: impl Into<PeerId>) {
        *self.focused.lock().expect("focus lock") = Some(id.into());
    }

    /// Clear focus (no document active).
    pub fn blur(&self) {
        *self.focused.lock().expect("focus lock") = None;
    }

    /// All alerts shown so far, in order.
    pub fn alerts(&self) -> Vec<(String, Severity)> {
        self.alerts.lock().expect("alert lock").clone()
    }
}

impl HostApp for MockHost {
    fn open_documents(&self) -> Vec<Arc<dyn DocumentHandle>> {
        self.documents
            .lock()
            .expect("document lock")
            .iter()
            .map(|d| d.clone() as Arc<dyn DocumentHandle>)
            .collect()
    }

    fn focused_document(&self) -> Option<PeerId> {
        self.focused.lock().expect("focus lock").clone()
    }

    fn alert(&self, message: &str, severity: Severity) {
        debug!(%severity, message, "host alert");
        self.alerts
            .lock()
            .expect("alert lock")
            .push((message.to_string(), severity));
    }
}
