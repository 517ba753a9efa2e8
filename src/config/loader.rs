//! Configuration resolution from the environment.
//!
//! # Responsibilities
//! - Load `.env` overrides if present, creating an empty file on first run
//! - Read `LOG_PATH` and `LOG_LEVEL`
//! - Substitute defaults so resolution never fails
//!
//! # Design Decisions
//! - Unset `LOG_PATH` defaults to `"logs"` (dual sink); an explicitly
//!   empty `LOG_PATH` selects stdout-only mode
//! - Unknown `LOG_LEVEL` values fall back to `info` rather than erroring
//! - `.env` creation is a first-run convenience and is never fatal

use std::env;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::config::schema::{Level, LogConfig, DEFAULT_LOG_DIR};

/// Environment variable naming the log directory.
pub const LOG_PATH_VAR: &str = "LOG_PATH";

/// Environment variable naming the minimum level.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

const ENV_FILE: &str = ".env";

/// Resolve logging configuration from the process environment.
///
/// Never fails: missing or malformed values fall back to defaults.
pub fn resolve() -> LogConfig {
    resolve_from(Path::new(ENV_FILE))
}

/// Resolution against an explicit `.env` location, so tests can run in a
/// scratch directory without changing the process working directory.
fn resolve_from(env_file: &Path) -> LogConfig {
    if dotenvy::from_path(env_file).is_err() {
        // First-run convenience; creation failure is ignored.
        let _ = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(env_file);
    }

    LogConfig::from_values(env::var(LOG_PATH_VAR).ok(), env::var(LOG_LEVEL_VAR).ok())
}

impl LogConfig {
    /// Apply the default-substitution policy to raw variable values.
    ///
    /// Split out from [`resolve`] so the policy is testable without
    /// touching the process environment.
    pub fn from_values(path: Option<String>, level: Option<String>) -> Self {
        let directory = match path {
            None => Some(PathBuf::from(DEFAULT_LOG_DIR)),
            Some(p) if p.is_empty() => None,
            Some(p) => Some(PathBuf::from(p)),
        };

        let min_level = level
            .and_then(|l| l.parse::<Level>().ok())
            .unwrap_or(Level::Info);

        Self {
            directory,
            min_level,
        }
    }
}
