//! Position representations and the sync mode selecting between them.
//!
//! Two models of "where the viewport is": the raw scroll offset in host
//! units, and a normalized fraction of the scroll range rounded to
//! hundredths. Conversions are lossy by design (the original feature rounds
//! to the nearest 1% of the maximum).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute scroll offset in host viewport units.
pub type ScrollUnits = u32;

/// A viewport position in one of the two supported representations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Raw scroll offset, `0..=max`
    AbsoluteUnits(ScrollUnits),

    /// Fraction of the scroll range, `[0, 1]` rounded to hundredths
    RelativeFraction(f64),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::AbsoluteUnits(v) => write!(f, "{v}"),
            Position::RelativeFraction(r) => write!(f, "{:.0}%", r * 100.0),
        }
    }
}

/// Which position representation a session mirrors between its peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncMode {
    /// Mirror the normalized fraction (documents of different lengths)
    Percentage,
    /// Mirror the raw scroll offset (near-identical documents)
    AbsoluteValue,
    /// Declared, not yet implemented: align by enclosing heading
    Heading,
    /// Declared, not yet implemented: align by paragraph index
    Paragraph,
}

impl SyncMode {
    /// Whether a session can actually be established in this mode.
    ///
    /// `Heading` and `Paragraph` are accepted by the controller but perform
    /// no operation; they are reported as unimplemented, never silently
    /// dropped.
    pub fn is_implemented(self) -> bool {
        matches!(self, SyncMode::Percentage | SyncMode::AbsoluteValue)
    }

    /// The user-facing command name this mode is dispatched under.
    pub fn command_name(self) -> &'static str {
        match self {
            SyncMode::Percentage => "SyncByPercentage",
            SyncMode::AbsoluteValue => "SyncByAbsoluteValue",
            SyncMode::Heading => "SyncByHeading",
            SyncMode::Paragraph => "SyncByParagraph",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SyncMode::Percentage => "percentage",
            SyncMode::AbsoluteValue => "absolute-value",
            SyncMode::Heading => "heading",
            SyncMode::Paragraph => "paragraph",
        };
        write!(f, "{name}")
    }
}

/// Round a fraction to the nearest hundredth.
#[inline]
pub fn round_hundredths(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Convert an absolute offset to a relative fraction of `max`.
///
/// Returns `None` when `max == 0`: a zero scroll range is a terminal error
/// for the peer, never a valid "always 0%" state.
#[inline]
pub fn absolute_to_relative(value: ScrollUnits, max: ScrollUnits) -> Option<f64> {
    if max == 0 {
        return None;
    }
    Some(round_hundredths(value as f64 / max as f64))
}

/// Convert a relative fraction (assumed in `[0, 1]`) to an absolute offset.
///
/// Truncates toward zero, matching the scrollbar semantics of the original
/// feature.
#[inline]
pub fn relative_to_absolute(fraction: f64, max: ScrollUnits) -> ScrollUnits {
    (fraction * max as f64).floor() as ScrollUnits
}
