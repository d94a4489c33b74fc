//! Parse command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::position::Position;
use crate::separator::Separator;

#[derive(Parser, Debug)]
#[clap(
    name = "ansi-truncate",
    about = "Truncate text to a display width",
    version
)]
pub struct Opt {
    #[clap(
        value_name = "TEXT",
        help = "Text to truncate\n[default: lines read from standard input]"
    )]
    pub text: Vec<String>,

    #[clap(
        short,
        long,
        value_name = "COLUMNS",
        help = "Maximum display width of the output"
    )]
    pub length: Option<usize>,

    #[clap(
        long,
        conflicts_with = "length",
        help = "Print text unchanged regardless of width"
    )]
    pub no_truncate: bool,

    #[clap(
        short,
        long,
        value_name = "STRING",
        help = "String marking omitted content"
    )]
    pub omission: Option<String>,

    #[clap(
        short,
        long,
        value_name = "POSITION",
        help = "Where to omit content\n[start, end, middle, ends, or a column offset]"
    )]
    pub position: Option<Position>,

    #[clap(
        short,
        long,
        value_name = "SEPARATOR",
        value_parser = parse_separator,
        help = "Only cut between words split by SEPARATOR\n[prefix with ~ for a regular expression]"
    )]
    pub separator: Option<Separator>,

    #[clap(
        long,
        conflicts_with = "separator",
        help = "Ignore any configured separator"
    )]
    pub no_separator: bool,

    #[clap(
        short = 'c',
        long,
        value_name = "FILE",
        help = "Override default config file path"
    )]
    pub config: Option<PathBuf>,
}

impl Opt {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

// Separator also converts from &str, which clap would otherwise pick over
// FromStr and treat every value as a literal.
fn parse_separator(s: &str) -> Result<Separator> {
    s.parse()
}
