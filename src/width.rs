//! Display width measurement.

use unicode_width::UnicodeWidthChar;

use crate::ansi;

/// Number of terminal columns occupied by `c`. Control characters have no
/// width.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Number of terminal columns occupied by `text`, ignoring escape
/// sequences.
///
/// This is always the sum of the widths of the visible characters, so the
/// width of a concatenation is the sum of the widths of its parts.
pub fn display_width(text: &str) -> usize {
    ansi::strip(text).chars().map(char_width).sum()
}
