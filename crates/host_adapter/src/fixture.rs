//! Fixture loading for mock documents.
//!
//! Parses a plain-text document description, one paragraph per line:
//!
//! ```text
//! Heading 1 | Introduction
//! Body Text | The first body paragraph.
//! plain line without a pipe
//! ```
//!
//! A `style | text` line sets the paragraph style explicitly; a line without
//! a pipe becomes a default-styled paragraph. `#` lines and blank lines are
//! skipped. Used by the CLI compatibility diagnostic.

use std::path::Path;

use contracts::{Paragraph, SyncError};

/// Style assigned to lines that don't name one.
pub const DEFAULT_STYLE: &str = "Default Paragraph Style";

/// Parse fixture content into a paragraph sequence.
pub fn parse_paragraphs(content: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    for raw in content.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once('|') {
            Some((style, text)) => {
                paragraphs.push(Paragraph::new(text.trim(), style.trim()));
            }
            None => paragraphs.push(Paragraph::new(line, DEFAULT_STYLE)),
        }
    }
    paragraphs
}

/// Load a paragraph sequence from a fixture file.
pub fn load_paragraphs(path: &Path) -> Result<Vec<Paragraph>, SyncError> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_paragraphs(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_styled_lines() {
        let paras = parse_paragraphs("Heading 1 | Intro\nBody Text | Hello.\n");
        assert_eq!(paras.len(), 2);
        assert_eq!(paras[0].style, "Heading 1");
        assert_eq!(paras[0].text, "Intro");
    }

    #[test]
    fn test_plain_lines_get_default_style() {
        let paras = parse_paragraphs("just text\n");
        assert_eq!(paras[0].style, DEFAULT_STYLE);
        assert_eq!(paras[0].text, "just text");
    }

    #[test]
    fn test_comments_and_blanks_skipped() {
        let paras = parse_paragraphs("# a comment\n\nBody Text | x\n");
        assert_eq!(paras.len(), 1);
    }
}
