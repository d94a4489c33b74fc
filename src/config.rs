//! Configuration file handling for the command-line tool.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::configuration::{Configuration, DEFAULT_LENGTH, DEFAULT_OMISSION};
use crate::opt::Opt;
use crate::position::Position;
use crate::separator::Separator;

/// Represents a configuration deserialized from a file. Command-line options
/// are layered on top before it becomes a [`Configuration`].
#[derive(Deserialize, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default = "default_length")]
    length: Option<usize>,
    #[serde(default = "default_omission")]
    omission: String,
    #[serde(default)]
    position: Position,
    separator: Option<Separator>,
}

fn default_length() -> Option<usize> {
    Some(DEFAULT_LENGTH)
}

fn default_omission() -> String {
    String::from(DEFAULT_OMISSION)
}

impl ConfigFile {
    /// Override configuration with command-line arguments.
    fn apply_opt(&mut self, opt: &Opt) {
        if let Some(length) = opt.length {
            self.length = Some(length);
        }

        if opt.no_truncate {
            self.length = None;
        }

        if let Some(omission) = &opt.omission {
            self.omission = omission.clone();
        }

        if let Some(position) = opt.position {
            self.position = position;
        }

        if let Some(separator) = &opt.separator {
            self.separator = Some(separator.clone());
        }

        if opt.no_separator {
            self.separator = None;
        }
    }
}

impl From<ConfigFile> for Configuration {
    fn from(config_file: ConfigFile) -> Self {
        Self {
            length: config_file.length,
            omission: config_file.omission,
            position: config_file.position,
            separator: config_file.separator,
        }
    }
}

/// Returns the configuration file path.
pub fn default_path() -> Option<PathBuf> {
    let name = env!("CARGO_PKG_NAME");

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Some(
            Path::new(&xdg_config).join(format!("{name}/{name}.toml")),
        );
    }

    if let Ok(home) = env::var("HOME") {
        return Some(
            Path::new(&home).join(format!(".config/{name}/{name}.toml")),
        );
    }

    None
}

/// Build the configuration from the file at `path`, if it exists, and the
/// command-line options.
pub fn load(path: Option<&Path>, opt: &Opt) -> anyhow::Result<Configuration> {
    let mut config_file: ConfigFile = match path {
        Some(path) if path.exists() => {
            let context = || {
                format!(
                    "Failed to read configuration from file '{}'",
                    path.display()
                )
            };

            let toml_str = fs::read_to_string(path).with_context(context)?;

            toml::from_str(&toml_str).with_context(context)?
        }
        _ => toml::from_str("")?,
    };
    config_file.apply_opt(opt);

    log::debug!("configuration: {config_file:?}");

    Ok(Configuration::from(config_file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;

    /// Parse a config file without applying any defaults.
    #[derive(Deserialize, Debug)]
    #[serde(deny_unknown_fields)]
    struct StrictConfigFile {
        length: usize,
        omission: String,
        position: Position,
    }

    fn opt(args: &[&str]) -> Opt {
        let args = std::iter::once("ansi-truncate").chain(args.iter().copied());
        Opt::parse_from(args)
    }

    #[test]
    fn empty_config_file() {
        let config: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(Configuration::from(config), Configuration::default());
    }

    #[test]
    fn unknown_field_config_file() {
        let config = r#"
        unknown = "unknown"
        "#;
        assert!(toml::from_str::<ConfigFile>(config).is_err());
    }

    #[test]
    fn full_config_file() {
        let config = r#"
        length = 25
        omission = "[...]"
        position = "start"
        separator = "~[, ]"
        "#;
        let config: ConfigFile = toml::from_str(config).unwrap();
        assert_eq!(
            Configuration::from(config),
            Configuration {
                length: Some(25),
                omission: String::from("[...]"),
                position: Position::Start,
                separator: Some(Separator::pattern("[, ]").unwrap()),
            }
        );
    }

    #[test]
    fn offset_position() {
        let config: ConfigFile = toml::from_str(r#"position = "3""#).unwrap();
        assert_eq!(config.position, Position::Offset(3));
    }

    #[test]
    fn invalid_position() {
        let err = toml::from_str::<ConfigFile>(r#"position = "unknown""#)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported position"));
    }

    #[test]
    fn invalid_separator() {
        assert!(toml::from_str::<ConfigFile>(r#"separator = "~[""#).is_err());
    }

    #[test]
    fn negative_length() {
        assert!(toml::from_str::<ConfigFile>("length = -1").is_err());
    }

    #[test]
    fn opt_overrides_file() {
        let mut config: ConfigFile = toml::from_str(
            r#"
            length = 25
            separator = " "
            "#,
        )
        .unwrap();
        config.apply_opt(&opt(&["-l", "10", "-p", "middle"]));

        let config = Configuration::from(config);
        assert_eq!(config.length, Some(10));
        assert_eq!(config.position, Position::Middle);
        assert_eq!(config.separator, Some(Separator::from(" ")));
    }

    #[test]
    fn opt_disables_truncation() {
        let mut config: ConfigFile = toml::from_str("length = 25").unwrap();
        config.apply_opt(&opt(&["--no-truncate"]));
        assert_eq!(config.length, None);
    }

    #[test]
    fn opt_clears_separator() {
        let mut config: ConfigFile =
            toml::from_str(r#"separator = " ""#).unwrap();
        config.apply_opt(&opt(&["--no-separator"]));
        assert_eq!(config.separator, None);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = Path::new("/nonexistent/ansi-truncate.toml");
        let config = load(Some(path), &opt(&[])).unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn example_config_file_matches_default_config_file() {
        let toml_str = include_str!("../ansi-truncate.toml");
        let example: StrictConfigFile = toml::from_str(toml_str).unwrap();
        let default: ConfigFile = toml::from_str("").unwrap();

        assert_eq!(default.length, Some(example.length));
        assert_eq!(default.omission, example.omission);
        assert_eq!(default.position, example.position);
        assert_eq!(default.separator, None);
    }
}
