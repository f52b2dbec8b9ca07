//! Structural-compatibility check.
//!
//! Two documents are structurally compatible when their paragraph-style-name
//! sequences are equal in length and pairwise equal. Pure and
//! side-effect-free; gates the (not yet implemented) structural sync modes
//! and backs the compatibility diagnostic. Percentage/AbsoluteValue sessions
//! never call this.

use contracts::{CompatibilityResult, Paragraph};

/// Compare two paragraph sequences by style name, in lock-step.
///
/// The mismatch index is positional: the first position where the sequences
/// diverge. A pure length mismatch reports the shorter length.
pub fn check(a: &[Paragraph], b: &[Paragraph]) -> CompatibilityResult {
    walk(a.iter().map(|p| p.style.as_str()), a.len(), b.iter().map(|p| p.style.as_str()), b.len())
}

/// Compare two style-name sequences directly.
pub fn check_styles(a: &[String], b: &[String]) -> CompatibilityResult {
    walk(a.iter().map(String::as_str), a.len(), b.iter().map(String::as_str), b.len())
}

fn walk<'a>(
    a: impl Iterator<Item = &'a str>,
    a_len: usize,
    b: impl Iterator<Item = &'a str>,
    b_len: usize,
) -> CompatibilityResult {
    for (index, (left, right)) in a.zip(b).enumerate() {
        if left != right {
            return CompatibilityResult::mismatch_at(index);
        }
    }
    if a_len != b_len {
        return CompatibilityResult::mismatch_at(a_len.min(b_len));
    }
    CompatibilityResult::compatible()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sequences_are_compatible() {
        let a = styles(&["Heading", "Body", "Body"]);
        let result = check_styles(&a, &a.clone());
        assert_eq!(result, CompatibilityResult::compatible());
    }

    #[test]
    fn test_divergence_reports_first_index() {
        let a = styles(&["Heading", "Body", "Body"]);
        let b = styles(&["Heading", "Body", "Title"]);
        assert_eq!(check_styles(&a, &b), CompatibilityResult::mismatch_at(2));
    }

    #[test]
    fn test_length_mismatch_reports_shorter_length() {
        let a = styles(&["Heading", "Body"]);
        let b = styles(&["Heading", "Body", "Body"]);
        assert_eq!(check_styles(&a, &b), CompatibilityResult::mismatch_at(2));
        assert_eq!(check_styles(&b, &a), CompatibilityResult::mismatch_at(2));
    }

    #[test]
    fn test_empty_sequences_are_compatible() {
        assert!(check_styles(&[], &[]).compatible);
        assert_eq!(check_styles(&[], &styles(&["Body"])), CompatibilityResult::mismatch_at(0));
    }

    #[test]
    fn test_paragraph_overload_ignores_text() {
        let a = vec![
            Paragraph::new("one", "Body"),
            Paragraph::new("two", "Body"),
        ];
        let b = vec![
            Paragraph::new("un", "Body"),
            Paragraph::new("deux", "Body"),
        ];
        assert!(check(&a, &b).compatible);
    }
}
