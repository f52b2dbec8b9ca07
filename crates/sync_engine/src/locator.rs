//! Paragraph location by content match.
//!
//! Maps a paragraph back to its index by exact text equality. Identity is by
//! content only — the host exposes no stable paragraph handles — so
//! duplicate-content paragraphs collapse to the first match. That ambiguity
//! is deterministic and documented, not silently repaired. O(n) per call;
//! runs once per user-triggered sync action, never per scroll event.

use contracts::Paragraph;

/// Index of the first paragraph whose text equals `target`, if any.
pub fn locate(paragraphs: &[Paragraph], target: &str) -> Option<usize> {
    paragraphs.iter().position(|p| p.text == target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Vec<Paragraph> {
        vec![
            Paragraph::new("Introduction", "Heading 1"),
            Paragraph::new("First body paragraph.", "Body Text"),
            Paragraph::new("Second body paragraph.", "Body Text"),
            Paragraph::new("Repeated.", "Body Text"),
            Paragraph::new("Repeated.", "Body Text"),
        ]
    }

    #[test]
    fn test_first_paragraph_is_index_zero() {
        assert_eq!(locate(&doc(), "Introduction"), Some(0));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(locate(&doc(), "not in the document"), None);
    }

    #[test]
    fn test_duplicate_text_returns_lower_index_for_both() {
        // Paragraphs 3 and 4 share the same text; both resolve to 3.
        let paragraphs = doc();
        assert_eq!(locate(&paragraphs, &paragraphs[3].text), Some(3));
        assert_eq!(locate(&paragraphs, &paragraphs[4].text), Some(3));
    }
}
