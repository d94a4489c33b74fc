use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use ansi_truncate::config;
use ansi_truncate::opt::Opt;
use ansi_truncate::{Options, Truncation};

#[cfg(feature = "trace")]
use ansi_truncate::{trace, trace_dbg};

fn main() -> Result<()> {
    let opt = Opt::parse();

    #[cfg(feature = "trace")]
    trace::initialize_logging()?;

    if let Some(path) = &opt.config {
        if !path.exists() {
            anyhow::bail!("config file '{}' does not exist", path.display());
        }
    }
    let config_path = opt.config.clone().or_else(config::default_path);

    let configuration = config::load(config_path.as_deref(), &opt)?;
    #[cfg(feature = "trace")]
    let configuration = trace_dbg!(configuration);

    let truncation = Truncation::with_config(configuration);
    let options = Options::new();

    let mut stdout = io::stdout().lock();
    if opt.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from standard input")?;
            writeln!(stdout, "{}", truncation.truncate(&line, &options))?;
        }
    } else {
        for text in &opt.text {
            writeln!(stdout, "{}", truncation.truncate(text, &options))?;
        }
    }

    Ok(())
}
