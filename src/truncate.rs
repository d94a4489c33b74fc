//! String truncation tools.

use once_cell::sync::Lazy;

use crate::configuration::{Configuration, Options};
use crate::position::Position;
use crate::strategy::{self, Request};
use crate::width::display_width;

static DEFAULT: Lazy<Truncation> = Lazy::new(Truncation::new);

/// Truncate `text` to `length` columns using the default configuration.
///
/// ```
/// let text = "It is not down on any map; true places never are.";
/// assert_eq!(ansi_truncate::truncate(text, 15), "It is not down…");
/// ```
pub fn truncate(text: &str, length: usize) -> String {
    DEFAULT.truncate(text, &Options::new().length(length))
}

/// Truncate `text` with `options` layered over the default configuration.
pub fn truncate_with(text: &str, options: &Options) -> String {
    DEFAULT.truncate(text, options)
}

/// A truncator carrying its own [`Configuration`].
#[derive(Debug, Default, Clone)]
pub struct Truncation {
    configuration: Configuration,
}

impl Truncation {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(configuration: Configuration) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Change the configuration in place.
    pub fn configure(&mut self, f: impl FnOnce(&mut Configuration)) {
        f(&mut self.configuration);
    }

    /// Truncate `text` so that it fits the configured length.
    ///
    /// Text that already fits is returned unchanged. Otherwise content is
    /// removed at the configured position and replaced by the omission.
    pub fn truncate(&self, text: &str, options: &Options) -> String {
        let settings = self.configuration.resolve(options);

        let Some(length) = settings.length else {
            return text.to_string();
        };

        if length == 0 {
            return String::new();
        }

        let text_width = display_width(text);
        if text_width <= length {
            return text.to_string();
        }

        let omission_width = display_width(settings.omission);
        if omission_width >= length {
            return settings.omission.to_string();
        }

        log::trace!(
            "truncating {text_width} columns to {length} at {}",
            settings.position
        );

        let request = Request {
            text,
            text_width,
            length,
            omission: settings.omission,
            omission_width,
            separator: settings.separator,
        };

        match settings.position {
            Position::Start => strategy::start(&request),
            Position::End => strategy::offset(&request, 0),
            Position::Middle => strategy::middle(&request),
            Position::Ends => strategy::ends(&request),
            Position::Offset(from) => strategy::offset(&request, from),
        }
    }
}
