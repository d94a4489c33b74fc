//! Width-aware slicing of text containing escape sequences.
//!
//! [`slice`] walks the text once, selecting the visible characters that fall
//! into a window of display columns. Escape sequences are copied through at
//! their original position whether or not they are inside the window, and a
//! style left open by the cut is closed with a reset.

use smallvec::SmallVec;

use crate::ansi::{self, Token, Tokens};
use crate::separator::Separator;
use crate::width::char_width;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Slice {
    pub text: String,
    /// The window closed before the end of the text.
    pub stopped: bool,
}

#[derive(Debug)]
enum Unit<'a> {
    Escape(&'a str),
    Visible(&'a str),
}

/// Accumulates the slice. When splitting into words, units are held in
/// `word` until a separator or the end of the text shows the word is
/// complete.
struct Output<'a> {
    text: String,
    word: SmallVec<[Unit<'a>; 16]>,
    split_words: bool,
}

impl<'a> Output<'a> {
    fn new(capacity: usize, split_words: bool) -> Self {
        Self {
            text: String::with_capacity(capacity),
            word: SmallVec::new(),
            split_words,
        }
    }

    fn push(&mut self, unit: Unit<'a>) {
        if self.split_words {
            self.word.push(unit);
        } else {
            match unit {
                Unit::Escape(s) | Unit::Visible(s) => self.text.push_str(s),
            }
        }
    }

    fn flush_word(&mut self) {
        for unit in self.word.drain(..) {
            match unit {
                Unit::Escape(s) | Unit::Visible(s) => self.text.push_str(s),
            }
        }
    }

    /// Drop the visible part of an incomplete word. Its escape sequences
    /// are kept so styles stay balanced.
    fn discard_word(&mut self) {
        for unit in self.word.drain(..) {
            if let Unit::Escape(s) = unit {
                self.text.push_str(s);
            }
        }
    }
}

/// Extract at most `length` columns of visible text starting at column
/// `from`.
///
/// With a `separator`, only whole words are kept: a word cut by either edge
/// of the window is dropped. The final visible character of the text is
/// kept if it overflows the window by no more than `slack` columns.
pub fn slice(
    text: &str,
    from: usize,
    length: usize,
    slack: usize,
    separator: Option<&Separator>,
) -> Slice {
    let is_separator = |c: char| separator.is_some_and(|sep| sep.matches(c));

    let mut output = Output::new(text.len(), separator.is_some());
    let mut cursor_width = 0;
    let mut included_width = 0;
    let mut style_open = false;
    let mut entered = false;
    let mut after_separator = false;
    let mut mid_word = false;
    let mut stopped = false;

    for (token, rest) in Tokens::new(text) {
        match token {
            Token::Reset(reset) => {
                // A reset closing the text is re-added below if needed.
                if !rest.is_empty() {
                    output.push(Unit::Escape(reset));
                    style_open = false;
                }
            }
            Token::Open(open) => {
                output.push(Unit::Escape(open));
                style_open = true;
            }
            Token::Char(s, c) => {
                let width = char_width(c);
                let start = cursor_width;
                cursor_width += width;

                if start < from {
                    after_separator = is_separator(c);
                    continue;
                }

                if !entered {
                    entered = true;
                    mid_word =
                        separator.is_some() && from > 0 && !after_separator;
                }

                included_width += width;

                if is_separator(c) {
                    if mid_word {
                        // The separator ends the cut word and is dropped.
                        mid_word = false;
                        continue;
                    }
                    output.flush_word();
                }

                let fits = included_width <= length
                    || (included_width <= length + slack
                        && ansi::is_trailing(rest));
                if fits {
                    if !mid_word {
                        output.push(Unit::Visible(s));
                    }
                } else {
                    stopped = true;
                    break;
                }
            }
        }
    }

    if !entered {
        return Slice {
            text: String::new(),
            stopped,
        };
    }

    if stopped {
        output.discard_word();
    } else {
        output.flush_word();
    }

    if style_open {
        output.text.push_str(ansi::RESET);
    }

    Slice {
        text: output.text,
        stopped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice_text(text: &str, from: usize, length: usize) -> (String, bool) {
        let slice = slice(text, from, length, 0, None);
        (slice.text, slice.stopped)
    }

    fn slice_slack(
        text: &str,
        from: usize,
        length: usize,
        slack: usize,
    ) -> (String, bool) {
        let slice = slice(text, from, length, slack, None);
        (slice.text, slice.stopped)
    }

    fn slice_words(
        text: &str,
        from: usize,
        length: usize,
        separator: &str,
    ) -> (String, bool) {
        let separator = Separator::from(separator);
        let slice = slice(text, from, length, 0, Some(&separator));
        (slice.text, slice.stopped)
    }

    #[test]
    fn head() {
        assert_eq!(slice_text("hello world", 0, 5), ("hello".into(), true));
    }

    #[test]
    fn whole() {
        assert_eq!(slice_text("hello", 0, 5), ("hello".into(), false));
    }

    #[test]
    fn offset() {
        assert_eq!(slice_text("hello world", 6, 3), ("wor".into(), true));
    }

    #[test]
    fn tolerates_final_character() {
        assert_eq!(slice_slack("hello", 1, 3, 1), ("ello".into(), false));
        assert_eq!(slice_slack("hello", 1, 2, 1), ("el".into(), true));
    }

    #[test]
    fn no_tolerance_without_slack() {
        assert_eq!(slice_text("hello", 1, 3), ("ell".into(), true));
    }

    #[test]
    fn tolerates_final_character_before_escape() {
        assert_eq!(
            slice_slack("\x1b[1mab\x1b[0m", 0, 1, 1),
            ("\x1b[1mab\x1b[0m".into(), false)
        );
    }

    #[test]
    fn wide_final_character_exceeding_slack() {
        assert_eq!(slice_slack("abc你", 0, 3, 1), ("abc".into(), true));
        assert_eq!(slice_slack("abc你", 0, 3, 2), ("abc你".into(), false));
    }

    #[test]
    fn empty_window() {
        assert_eq!(slice_text("abc", 5, 2), (String::new(), false));
        assert_eq!(slice_text("", 0, 2), (String::new(), false));
    }

    #[test]
    fn zero_length() {
        assert_eq!(slice_text("abc", 0, 0), (String::new(), true));
    }

    #[test]
    fn wide_characters() {
        assert_eq!(slice_text("你好世界", 0, 5), ("你好".into(), true));
        assert_eq!(slice_text("你好世界!", 2, 4), ("好世".into(), true));
    }

    #[test]
    fn wide_character_straddling_start() {
        assert_eq!(slice_text("你好世界!", 1, 4), ("好世".into(), true));
    }

    #[test]
    fn closes_open_style() {
        assert_eq!(
            slice_text("\x1b[31mhello\x1b[0m", 0, 3),
            ("\x1b[31mhel\x1b[0m".into(), true)
        );
    }

    #[test]
    fn keeps_inner_reset() {
        assert_eq!(
            slice_text("a\x1b[31mb\x1b[0mcde", 0, 3),
            ("a\x1b[31mb\x1b[0mc".into(), true)
        );
    }

    #[test]
    fn reset_at_end_of_input_is_written_once() {
        assert_eq!(
            slice_text("\x1b[31mab\x1b[0m", 0, 5),
            ("\x1b[31mab\x1b[0m".into(), false)
        );
    }

    #[test]
    fn drops_reset_at_end_of_input() {
        assert_eq!(slice_text("ab\x1b[0m", 0, 5), ("ab".into(), false));
    }

    #[test]
    fn keeps_escapes_before_window() {
        assert_eq!(
            slice_text("\x1b[1mab", 1, 5),
            ("\x1b[1mb\x1b[0m".into(), false)
        );
    }

    #[test]
    fn drops_escapes_without_visible_text() {
        assert_eq!(slice_text("\x1b[1m", 0, 3), (String::new(), false));
    }

    #[test]
    fn whole_words() {
        assert_eq!(
            slice_words("It is not down on any map;", 0, 20, " "),
            ("It is not down on".into(), true)
        );
    }

    #[test]
    fn whole_words_to_end() {
        assert_eq!(
            slice_words("aaa bbb ccc", 4, 7, " "),
            ("bbb ccc".into(), false)
        );
    }

    #[test]
    fn skips_word_cut_by_start() {
        assert_eq!(
            slice_words("aaa bbb ccc", 5, 6, " "),
            ("ccc".into(), false)
        );
    }

    #[test]
    fn skips_word_cut_by_start_without_earlier_separator() {
        assert_eq!(
            slice_words("aaaa bbb", 2, 6, " "),
            ("bbb".into(), false)
        );
    }

    #[test]
    fn separator_on_window_start_is_consumed() {
        assert_eq!(
            slice_words("aaa bbb ccc", 3, 8, " "),
            ("bbb ccc".into(), false)
        );
    }

    #[test]
    fn no_whole_word() {
        assert_eq!(slice_words("abcdef", 0, 3, " "), (String::new(), true));
    }

    #[test]
    fn every_character_is_a_word() {
        assert_eq!(
            slice_words("ラドクリフ、マラソン", 0, 11, ""),
            ("ラドクリフ".into(), true)
        );
    }

    #[test]
    fn words_keep_escape_order() {
        assert_eq!(
            slice_words("aaa \x1b[31mbbb\x1b[0m ccc", 0, 8, " "),
            ("aaa \x1b[31mbbb\x1b[0m".into(), true)
        );
    }

    #[test]
    fn discarded_word_keeps_escapes() {
        assert_eq!(
            slice_words("aaa \x1b[31mbbb\x1b[0m ccc", 0, 6, " "),
            ("aaa\x1b[31m\x1b[0m".into(), true)
        );
    }
}
