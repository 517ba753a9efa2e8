//! Logging configuration schema.
//!
//! This module defines the resolved configuration the logging subsystem
//! runs with. Resolution (environment lookup, default substitution) lives
//! in `loader.rs`; once built, a `LogConfig` is immutable.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Directory used when `LOG_PATH` is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Severity of a log record, ordered least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Lowercase name, as it appears in encoded records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for level strings that name no known level.
#[derive(Debug, Clone, Error)]
#[error("unknown log level {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Resolved logging configuration.
///
/// `directory: None` selects stdout-only mode: no file sink is opened and
/// the rotation monitor is not started.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the daily log files.
    pub directory: Option<PathBuf>,

    /// Minimum severity emitted to either sink.
    pub min_level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: Some(PathBuf::from(DEFAULT_LOG_DIR)),
            min_level: Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_parsing() {
        assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("Warn".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("error".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Fatal);
        assert!("verbose".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Fatal);
    }

    #[test]
    fn test_level_display_is_lowercase() {
        assert_eq!(Level::Warn.to_string(), "warn");
        assert_eq!(Level::Fatal.to_string(), "fatal");
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.directory.as_deref(), Some(std::path::Path::new("logs")));
        assert_eq!(config.min_level, Level::Info);
    }
}
