//! Paragraph data and the structural-compatibility result.

use serde::{Deserialize, Serialize};

/// One paragraph of a peer document, as supplied by the host.
///
/// Identity is by text content only: the host does not expose stable
/// paragraph handles, so duplicate-content paragraphs are indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Full paragraph text
    pub text: String,

    /// Paragraph style name (e.g. "Heading 1", "Body Text")
    pub style: String,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

/// Outcome of comparing two peers' paragraph-style sequences.
///
/// Gates the structural sync modes and backs the compatibility diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Whether the sequences are equal in length and pairwise equal
    pub compatible: bool,

    /// First index where the sequences diverge, by position.
    ///
    /// A length mismatch reports the shorter length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_mismatch: Option<usize>,
}

impl CompatibilityResult {
    /// Result for two compatible sequences.
    pub fn compatible() -> Self {
        Self {
            compatible: true,
            first_mismatch: None,
        }
    }

    /// Result for sequences diverging at `index`.
    pub fn mismatch_at(index: usize) -> Self {
        Self {
            compatible: false,
            first_mismatch: Some(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_omits_index_when_compatible() {
        let json = serde_json::to_string(&CompatibilityResult::compatible()).unwrap();
        assert_eq!(json, r#"{"compatible":true}"#);

        let json = serde_json::to_string(&CompatibilityResult::mismatch_at(2)).unwrap();
        assert_eq!(json, r#"{"compatible":false,"first_mismatch":2}"#);
    }
}
