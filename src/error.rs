use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// A position that is neither a known name nor a column offset.
    InvalidPosition(String),
    /// A separator pattern that failed to compile.
    InvalidSeparator(regex::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPosition(position) => {
                write!(f, "unsupported position: {position:?}")
            }
            Error::InvalidSeparator(err) => {
                write!(f, "invalid separator pattern: {err}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidPosition(_) => None,
            Error::InvalidSeparator(err) => Some(err),
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::InvalidSeparator(err)
    }
}
