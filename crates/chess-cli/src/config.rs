//! Configuration file loading for the console front end.
//!
//! Settings are read from `chess.toml` in the current directory unless
//! another path is given. A missing file yields the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Console settings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Command that takes back the last move. Defaults to "z".
    #[serde(default = "default_undo_command")]
    pub undo_command: String,
    /// Print the legal moves after every redraw. Defaults to false.
    #[serde(default)]
    pub show_legal_moves: bool,
    /// Log filter level for the tracing subscriber. Defaults to "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_undo_command() -> String {
    "z".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            undo_command: default_undo_command(),
            show_legal_moves: false,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `path`, or from [`Self::default_path()`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::parse(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Returns `chess.toml` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("chess.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = CliConfig::parse(
            r#"
undo_command = "u"
show_legal_moves = true
log_level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.undo_command, "u");
        assert!(config.show_legal_moves);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.undo_command, "z");
        assert!(!config.show_legal_moves);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = CliConfig::parse("show_legal_moves = maybe").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().starts_with("Failed to parse config"));
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = CliConfig::load(Some(Path::new("does/not/exist/chess.toml"))).unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
