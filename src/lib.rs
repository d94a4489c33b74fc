//! Truncate text to a display width.
//!
//! Widths are measured in terminal columns, so wide characters count twice.
//! ANSI escape sequences take no space and are kept intact, and a style cut
//! short by truncation is closed with a reset.

pub mod ansi;
pub mod config;
pub mod configuration;
pub mod error;
pub mod ext;
pub mod opt;
pub mod position;
pub mod separator;
pub mod slice;
pub mod strategy;
pub mod truncate;
pub mod width;

#[cfg(feature = "trace")]
pub mod trace;

pub use configuration::{
    Configuration, Options, DEFAULT_LENGTH, DEFAULT_OMISSION,
};
pub use error::{Error, Result};
pub use position::Position;
pub use separator::Separator;
pub use truncate::{truncate, truncate_with, Truncation};
pub use width::display_width;
