//! Truncation settings.

use crate::position::Position;
use crate::separator::Separator;

pub const DEFAULT_LENGTH: usize = 30;

pub const DEFAULT_OMISSION: &str = "…";

#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Maximum display width. `None` disables truncation.
    pub length: Option<usize>,
    /// Marks omitted content.
    pub omission: String,
    pub position: Position,
    /// Splits the text into words that are never cut.
    pub separator: Option<Separator>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            length: Some(DEFAULT_LENGTH),
            omission: String::from(DEFAULT_OMISSION),
            position: Position::default(),
            separator: None,
        }
    }
}

impl Configuration {
    /// Overwrite the settings that are present in `options`.
    pub fn update(&mut self, options: Options) {
        if let Some(length) = options.length {
            self.length = length;
        }

        if let Some(omission) = options.omission {
            self.omission = omission;
        }

        if let Some(position) = options.position {
            self.position = position;
        }

        if let Some(separator) = options.separator {
            self.separator = separator;
        }
    }

    /// Settings for a single call: `options` layered over `self`.
    pub(crate) fn resolve<'a>(&'a self, options: &'a Options) -> Resolved<'a> {
        Resolved {
            length: options.length.unwrap_or(self.length),
            omission: options.omission.as_deref().unwrap_or(&self.omission),
            position: options.position.unwrap_or(self.position),
            separator: match &options.separator {
                Some(separator) => separator.as_ref(),
                None => self.separator.as_ref(),
            },
        }
    }
}

/// Borrowed view of the settings in effect for one call.
pub(crate) struct Resolved<'a> {
    pub length: Option<usize>,
    pub omission: &'a str,
    pub position: Position,
    pub separator: Option<&'a Separator>,
}

/// Settings that override a [`Configuration`]. Anything left unset falls
/// back to the configuration.
///
/// ```
/// use ansi_truncate::{Options, Position};
///
/// let options = Options::new()
///     .length(20)
///     .omission("...")
///     .position(Position::Middle);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Options {
    length: Option<Option<usize>>,
    omission: Option<String>,
    position: Option<Position>,
    separator: Option<Option<Separator>>,
}

impl Options {
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum display width. `None` disables truncation.
    pub fn length(mut self, length: impl Into<Option<usize>>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn omission(mut self, omission: impl Into<String>) -> Self {
        self.omission = Some(omission.into());
        self
    }

    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Word separator. `None` clears a configured separator.
    pub fn separator(
        mut self,
        separator: impl Into<Option<Separator>>,
    ) -> Self {
        self.separator = Some(separator.into());
        self
    }
}
