//! Truncation as a method on strings.
//!
//! ```
//! use ansi_truncate::ext::TruncateExt;
//!
//! let text = "I try all things, I achieve what I can.";
//! assert_eq!(text.truncated(15), "I try all thin…");
//! ```

use crate::configuration::Options;
use crate::truncate::{truncate, truncate_with};

pub trait TruncateExt {
    /// Truncate to `length` columns with the default configuration.
    fn truncated(&self, length: usize) -> String;

    fn truncated_with(&self, options: &Options) -> String;
}

impl TruncateExt for str {
    fn truncated(&self, length: usize) -> String {
        truncate(self, length)
    }

    fn truncated_with(&self, options: &Options) -> String {
        truncate_with(self, options)
    }
}
