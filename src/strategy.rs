//! Truncation strategies, one per [`Position`](crate::Position).
//!
//! Each strategy decides which windows of the text to [`slice`] and where
//! the omission goes. They assume the text is wider than `length` and that
//! the omission is narrower than `length`.

use crate::separator::Separator;
use crate::slice::{slice, Slice};

pub struct Request<'a> {
    pub text: &'a str,
    pub text_width: usize,
    pub length: usize,
    pub omission: &'a str,
    pub omission_width: usize,
    pub separator: Option<&'a Separator>,
}

impl Request<'_> {
    /// `slack` is how far the final character of the text may overflow
    /// the window, which is the width of a trailing omission it replaces.
    fn slice(&self, from: usize, length: usize, slack: usize) -> Slice {
        log::trace!("slicing window [{from}, {})", from + length);
        slice(self.text, from, length, slack, self.separator)
    }
}

/// Keep the end of the text.
pub fn start(request: &Request) -> String {
    let mut from = request.text_width.saturating_sub(request.length);
    if from > 0 {
        from += request.omission_width;
    }

    let slice =
        request.slice(from, request.length - request.omission_width, 0);

    let mut result = String::with_capacity(request.text.len());
    if from > 0 {
        result.push_str(request.omission);
    }
    result.push_str(&slice.text);
    result
}

/// Keep the text following column `from`. The omission marks both the
/// skipped prefix and a cut end.
pub fn offset(request: &Request, from: usize) -> String {
    let mut length = request.length - request.omission_width;
    if from > 0 {
        length = length.saturating_sub(request.omission_width);
    }

    let slice = request.slice(from, length, request.omission_width);

    let mut result = String::with_capacity(request.text.len());
    if from > 0 {
        result.push_str(request.omission);
    }
    result.push_str(&slice.text);
    if slice.stopped {
        result.push_str(request.omission);
    }
    result
}

/// Keep the beginning and the end of the text.
pub fn middle(request: &Request) -> String {
    let half_length = request.length / 2;
    let rem_length = half_length + request.length % 2;
    let half_omission = request.omission_width / 2;
    let rem_omission = half_omission + request.omission_width % 2;

    let before =
        request.slice(0, half_length.saturating_sub(half_omission), 0);
    let after = request.slice(
        request.text_width - rem_length + rem_omission,
        rem_length.saturating_sub(rem_omission),
        0,
    );

    let mut result = String::with_capacity(request.text.len());
    result.push_str(&before.text);
    result.push_str(request.omission);
    result.push_str(&after.text);
    result
}

/// Keep the center of the text.
pub fn ends(request: &Request) -> String {
    let length = request
        .length
        .saturating_sub(2 * request.omission_width);
    if length == 0 {
        return request.omission.to_string();
    }

    let from = (request.text_width - length) / 2;
    let slice = request.slice(from, length, request.omission_width);

    let mut result = String::with_capacity(request.text.len());
    if from > 0 {
        result.push_str(request.omission);
    }
    result.push_str(&slice.text);
    if slice.stopped {
        result.push_str(request.omission);
    }
    result
}
