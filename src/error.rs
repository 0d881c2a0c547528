use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Conditions a [`Scanner`](crate::Scanner) reports instead of silently
/// ending or skipping. Which of them surface depends on
/// [`ScanOptions`](crate::ScanOptions).
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read source: {0}")]
    Io(#[from] io::Error),

    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("unrecognized character {ch:?} on line {line}")]
    UnrecognizedCharacter { ch: char, line: usize },
}

impl ScanError {
    /// Source line the error points at, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ScanError::Io(_) => None,
            ScanError::UnterminatedString { line } => Some(*line),
            ScanError::UnrecognizedCharacter { line, .. } => Some(*line),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access config file {}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid config file {}: {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors of the `rpalscan` driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("FileNotFoundError: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IOError: {0}")]
    Io(#[from] io::Error),

    #[error("ScanError: {}\n  --> {}", .source, .path.display())]
    Scan { path: PathBuf, source: ScanError },

    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),

    #[error("JSONError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
