//! Line-oriented key=value parsing.
//!
//! Format rules (fixed by the persisted-configuration contract):
//! - lines beginning with `#` are comments
//! - lines without a `=` are ignored
//! - keys are case-sensitive; surrounding whitespace is trimmed

/// A raw `key=value` entry with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub key: String,
    pub value: String,
}

/// Split file content into raw entries.
///
/// Never fails: unparseable lines are skipped by contract, not rejected.
pub fn parse(content: &str) -> Vec<Entry> {
    let mut entries = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        entries.push(Entry {
            line: idx + 1,
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        });
    }
    entries
}
