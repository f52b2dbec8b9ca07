//! Mock document implementation
//!
//! Implements `DocumentHandle` over in-memory paragraphs and a
//! `MockViewport`. A document can be built without a viewport to exercise
//! the adapter-lookup failure path.

use std::sync::Arc;

use contracts::{DocumentHandle, Paragraph, PeerId, ScrollUnits, SyncError, ViewportAdapter};

use crate::MockViewport;

/// In-memory document.
pub struct MockDocument {
    id: PeerId,
    title: String,
    text_document: bool,
    paragraphs: Vec<Paragraph>,
    viewport: Option<Arc<MockViewport>>,
}

impl MockDocument {
    /// Create a text document with a viewport of the given scroll range.
    pub fn text(id: impl Into<PeerId>, title: impl Into<String>, maximum: ScrollUnits) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text_document: true,
            paragraphs: Vec::new(),
            viewport: Some(Arc::new(MockViewport::new(maximum))),
        }
    }

    /// Create a non-text document (filtered out by peer discovery).
    pub fn non_text(id: impl Into<PeerId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text_document: false,
            paragraphs: Vec::new(),
            viewport: None,
        }
    }

    /// Attach a paragraph sequence.
    pub fn with_paragraphs(mut self, paragraphs: Vec<Paragraph>) -> Self {
        self.paragraphs = paragraphs;
        self
    }

    /// Remove the viewport, so `viewport()` fails with `AdapterLookup`.
    pub fn without_viewport(mut self) -> Self {
        self.viewport = None;
        self
    }

    /// Direct access to the underlying mock viewport (test assertions).
    pub fn mock_viewport(&self) -> Option<Arc<MockViewport>> {
        self.viewport.clone()
    }
}

impl DocumentHandle for MockDocument {
    fn id(&self) -> PeerId {
        self.id.clone()
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn is_text_document(&self) -> bool {
        self.text_document
    }

    fn paragraphs(&self) -> Result<Vec<Paragraph>, SyncError> {
        Ok(self.paragraphs.clone())
    }

    fn viewport(&self) -> Result<Arc<dyn ViewportAdapter>, SyncError> {
        match &self.viewport {
            Some(vp) => Ok(vp.clone() as Arc<dyn ViewportAdapter>),
            None => Err(SyncError::adapter_lookup(
                self.id.clone(),
                "no accessible scroll control",
            )),
        }
    }
}
