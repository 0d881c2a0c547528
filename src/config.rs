use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What a scanner does when its source fails to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoErrorPolicy {
    /// Report [`ScanError::Io`](crate::ScanError::Io) once, then behave as exhausted.
    #[default]
    Surface,
    /// Treat the failure exactly like end of input.
    TreatAsEof,
}

/// What a scanner does with input that cannot become a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPolicy {
    /// Drop the offending input without a token or a diagnostic.
    #[default]
    Discard,
    /// Return a [`ScanError`](crate::ScanError) for it.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanOptions {
    #[serde(default)]
    pub io_errors: IoErrorPolicy,
    #[serde(default)]
    pub unterminated_strings: RecoveryPolicy,
    #[serde(default)]
    pub unknown_chars: RecoveryPolicy,
}

impl ScanOptions {
    /// Every failure degrades to "no more tokens", nothing is ever reported.
    pub fn compatible() -> Self {
        Self {
            io_errors: IoErrorPolicy::TreatAsEof,
            unterminated_strings: RecoveryPolicy::Discard,
            unknown_chars: RecoveryPolicy::Discard,
        }
    }

    /// Every failure is reported.
    pub fn strict() -> Self {
        Self {
            io_errors: IoErrorPolicy::Surface,
            unterminated_strings: RecoveryPolicy::Error,
            unknown_chars: RecoveryPolicy::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings of the `rpalscan` driver, stored as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanOptions,
    #[serde(default)]
    pub format: OutputFormat,
    /// Leave whitespace and comment tokens out of the output.
    #[serde(default)]
    pub skip_deleted: bool,
}

impl Config {
    /// Loads the config at `path`, or at [`Config::default_path`] when no path
    /// is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let path = Self::default_path();
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents).map_err(io_error)
    }

    /// `$RPALSCAN_CONFIG`, else `~/.rpalscan/config.json`.
    pub fn default_path() -> PathBuf {
        if let Ok(custom) = env::var("RPALSCAN_CONFIG") {
            return PathBuf::from(custom);
        }

        let home = if cfg!(windows) {
            env::var("USERPROFILE")
        } else {
            env::var("HOME")
        };
        PathBuf::from(home.unwrap_or_else(|_| String::from(".")))
            .join(".rpalscan")
            .join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_surface_io_only() {
        let options = ScanOptions::default();
        assert_eq!(options.io_errors, IoErrorPolicy::Surface);
        assert_eq!(options.unterminated_strings, RecoveryPolicy::Discard);
        assert_eq!(options.unknown_chars, RecoveryPolicy::Discard);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"scan":{"unknown_chars":"error"},"format":"json"}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.scan.unknown_chars, RecoveryPolicy::Error);
        assert_eq!(config.scan.io_errors, IoErrorPolicy::Surface);
        assert!(!config.skip_deleted);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            scan: ScanOptions::strict(),
            format: OutputFormat::Text,
            skip_deleted: true,
        };

        config.save(&path).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(ConfigError::Json { .. })));
    }
}
