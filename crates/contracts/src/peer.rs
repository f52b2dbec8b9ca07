//! PeerId and Peer - the two documents of a sync session
//!
//! `PeerId` uses `Arc<str>` internally for O(1) clone operations.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use crate::{DocumentHandle, Paragraph, SyncError, ViewportAdapter};

/// Document identifier with cheap cloning.
///
/// Cloning only bumps a reference count; peer ids are created once at
/// discovery time and cloned into listeners, log fields and errors.
///
/// # Examples
/// ```
/// use contracts::PeerId;
///
/// let id: PeerId = "source.odt".into();
/// let id2 = id.clone();
/// assert_eq!(id, "source.odt");
/// assert_eq!(id, id2);
/// ```
#[derive(Clone, Default)]
pub struct PeerId(Arc<str>);

impl PeerId {
    /// Create a new PeerId from a string slice.
    #[inline]
    pub fn new(s: &str) -> Self {
        Self(Arc::from(s))
    }

    /// Get the underlying string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for PeerId {
    type Target = str;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for PeerId {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PeerId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PeerId {
    #[inline]
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for PeerId {
    #[inline]
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeerId({:?})", self.0)
    }
}

impl PartialEq for PeerId {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Fast path: same Arc pointer
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for PeerId {}

impl PartialEq<str> for PeerId {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for PeerId {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Hash for PeerId {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Serialize for PeerId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PeerId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s))
    }
}

/// One of exactly two open documents participating in a sync session.
///
/// Holds the host handles the engine needs: the document itself (paragraph
/// access for structural modes and diagnostics) and its resolved viewport
/// adapter. The paragraph-style sequence is fetched lazily, on demand, so
/// Percentage/AbsoluteValue sessions never enumerate paragraphs at all.
#[derive(Clone)]
pub struct Peer {
    /// Stable document identifier assigned by the host
    pub id: PeerId,

    /// Window/document title, for diagnostics
    pub title: String,

    /// Document handle
    pub document: Arc<dyn DocumentHandle>,

    /// Resolved viewport adapter
    pub viewport: Arc<dyn ViewportAdapter>,
}

impl Peer {
    /// Fetch the peer's paragraphs from the host.
    ///
    /// Runs once per user-triggered action, never per scroll event.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph>, SyncError> {
        self.document.paragraphs()
    }

    /// Fetch the peer's paragraph-style-name sequence.
    pub fn paragraph_styles(&self) -> Result<Vec<String>, SyncError> {
        Ok(self
            .paragraphs()?
            .into_iter()
            .map(|p| p.style)
            .collect())
    }
}

impl fmt::Debug for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Peer")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
