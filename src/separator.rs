//! Word separators.
//!
//! A separator is either a literal string or a regular expression. It is
//! tested against one character at a time; a character that matches marks a
//! word boundary. Both kinds follow pattern semantics, so an empty separator
//! matches every character and a literal longer than one character never
//! matches.

use regex::Regex;
use serde_with::DeserializeFromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, DeserializeFromStr)]
pub enum Separator {
    Literal(String),
    Pattern(Regex),
}

impl Separator {
    /// Compile `pattern` into a regular expression separator.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Separator::Pattern(Regex::new(pattern)?))
    }

    pub fn matches(&self, c: char) -> bool {
        match self {
            Separator::Literal(literal) => {
                let mut chars = literal.chars();
                match (chars.next(), chars.next()) {
                    (None, _) => true,
                    (Some(first), None) => first == c,
                    (Some(_), Some(_)) => false,
                }
            }
            Separator::Pattern(re) => re.is_match(c.encode_utf8(&mut [0; 4])),
        }
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Pattern(a), Self::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl From<&str> for Separator {
    fn from(literal: &str) -> Self {
        Separator::Literal(literal.to_string())
    }
}

impl From<char> for Separator {
    fn from(literal: char) -> Self {
        Separator::Literal(literal.to_string())
    }
}

impl From<Regex> for Separator {
    fn from(re: Regex) -> Self {
        Separator::Pattern(re)
    }
}

/// Parses `~pattern` as a regular expression and anything else as a
/// literal. `~~` escapes a literal starting with `~`.
impl std::str::FromStr for Separator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            s if s.starts_with("~~") => Ok(Separator::from(&s[1..])),
            s if s.starts_with('~') => Separator::pattern(&s[1..]),
            s => Ok(Separator::from(s)),
        }
    }
}
