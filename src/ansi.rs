//! ANSI escape sequence tokenizing.
//!
//! Splits text into escape tokens and ordinary characters. Recognizes:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char
//!
//! The SGR reset `ESC [ 0 m` is reported separately from other sequences
//! because truncation has to close any style it leaves open.

use std::borrow::Cow;

const ESC: u8 = 0x1B;

/// The canonical style reset sequence.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// The reset sequence.
    Reset(&'a str),
    /// Any other escape sequence. Usually opens a style.
    Open(&'a str),
    /// A single visible character.
    Char(&'a str, char),
}

/// Iterator over the [`Token`]s of a string.
///
/// Besides the token, yields the remainder of the input following it.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (Token<'a>, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let ch = rest.chars().next()?;

        let (token, len) = if rest.starts_with(RESET) {
            (Token::Reset(&rest[..RESET.len()]), RESET.len())
        } else if let Some(len) = escape_len(rest) {
            (Token::Open(&rest[..len]), len)
        } else {
            let len = ch.len_utf8();
            (Token::Char(&rest[..len], ch), len)
        };

        self.rest = &rest[len..];
        Some((token, self.rest))
    }
}

/// Byte length of the escape sequence at the start of `s`, if there is one.
pub fn escape_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&ESC) {
        return None;
    }

    Some(skip_escape_sequence(bytes, 0))
}

/// Whether `rest` is empty or consists of exactly one escape sequence.
pub fn is_trailing(rest: &str) -> bool {
    rest.is_empty() || escape_len(rest) == Some(rest.len())
}

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for (token, _) in Tokens::new(s) {
        if let Token::Char(c, _) = token {
            result.push_str(c);
        }
    }

    Cow::Owned(result)
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' => skip_string_terminated(bytes, next + 1),
        b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // Keep multi-byte characters whole so the cut stays on a char
        // boundary.
        b if b >= 0x80 => next,
        _ => next + 1,
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }

    len
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let len = bytes.len();
    let mut i = pos;

    while i < len {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if i + 1 < len && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }

    len
}
