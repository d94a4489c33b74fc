//! Where in the text content gets omitted.

use std::fmt;

use serde_with::DeserializeFromStr;

use crate::error::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, DeserializeFromStr)]
pub enum Position {
    /// Omit the beginning of the text.
    Start,
    /// Omit the end of the text.
    #[default]
    End,
    /// Omit the middle of the text.
    Middle,
    /// Omit both the beginning and the end of the text.
    Ends,
    /// Skip this many columns, then omit the end of the text.
    Offset(usize),
}

impl From<usize> for Position {
    fn from(offset: usize) -> Self {
        match offset {
            0 => Position::End,
            offset => Position::Offset(offset),
        }
    }
}

impl std::str::FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Position::Start),
            "end" => Ok(Position::End),
            "middle" => Ok(Position::Middle),
            "ends" => Ok(Position::Ends),
            s => s
                .parse::<usize>()
                .map(Position::from)
                .map_err(|_| Error::InvalidPosition(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Start => write!(f, "start"),
            Position::End => write!(f, "end"),
            Position::Middle => write!(f, "middle"),
            Position::Ends => write!(f, "ends"),
            Position::Offset(offset) => write!(f, "{offset}"),
        }
    }
}
