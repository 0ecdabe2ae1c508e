//! Configuration for the ringkas CLI.
//!
//! Settings live in a TOML file, by default `~/.config/ringkas/config.toml`.
//! Every key is optional; a missing file means all defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Output format written by `ringkas format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Plaintext,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Output format when `--to` is not given.
    pub format: OutputFormat,
    /// Pretty-print output.
    pub pretty: bool,
    /// Keep emphasis markers in rendered text.
    pub raw_markup: bool,
    /// Amount to shift heading levels by.
    pub heading_shift: i64,
    /// Drop sections that are blank after cleaning.
    pub strip_empty: bool,
    /// Wrap HTML output in a full page.
    pub full_document: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            raw_markup: false,
            heading_shift: 0,
            strip_empty: true,
            full_document: false,
        }
    }
}

impl Config {
    /// Load from `config_path`, or `None` if the file does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = expand_path(config_path.as_ref());
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.clone(),
                source,
            })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.clone(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::load_from_path(Self::config_path())?.unwrap_or_default())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/ringkas");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

fn expand_path(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();
    match shellexpand::full(&path_str) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_path(temp.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "format = \"json\"\npretty = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.pretty);
        assert!(config.strip_empty);
        assert_eq!(config.heading_shift, 0);
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "format = \"plaintext\"\npretty = false\nraw_markup = true\n\
             heading_shift = 1\nstrip_empty = false\nfull_document = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap().unwrap();

        assert_eq!(
            config,
            Config {
                format: OutputFormat::Plaintext,
                pretty: false,
                raw_markup: true,
                heading_shift: 1,
                strip_empty: false,
                full_document: true,
            }
        );
    }

    #[test]
    fn test_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "format = \"pdf\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "colour = true\n").unwrap();

        assert!(Config::load_from_path(&path).is_err());
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path();
        assert!(path.ends_with("ringkas/config.toml"));
    }
}
