//! Logger construction and record emission.
//!
//! # Responsibilities
//! - Open the file sink (append/create) and pair it with stdout
//! - Filter records below the configured minimum level
//! - Encode and write records; swallow individual write errors
//!
//! # Design Decisions
//! - A logger is immutable after construction; rotation replaces the whole
//!   instance instead of retargeting it
//! - The file sink is buffered and flushed on swap, on drop, and at
//!   shutdown, so a superseded instance never strands buffered lines
//! - Write failures are swallowed: logging must never crash the caller

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::config::{Level, ParseLevelError};
use crate::logger::record::{self, Field};

/// Errors raised while building a logger.
#[derive(Debug, Error)]
pub enum InitError {
    /// The minimum-level string named no known level. Recovered inside
    /// config resolution by substituting `info`.
    #[error(transparent)]
    Level(#[from] ParseLevelError),

    /// The file sink could not be opened. Fatal at startup; recovered
    /// during rotation by keeping the previous logger.
    #[error("cannot open log file {path}: {source}")]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug)]
struct FileSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

/// A fully built logger instance writing to stdout and, when configured,
/// to one daily file.
#[derive(Debug)]
pub struct Logger {
    min_level: Level,
    file: Option<FileSink>,
}

impl Logger {
    /// Build a logger writing to the file at `path` (append/create) and to
    /// stdout. With `None`, only stdout is used.
    pub fn build(path: Option<&Path>, min_level: Level) -> Result<Self, InitError> {
        let file = match path {
            Some(p) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(p)
                    .map_err(|source| InitError::Sink {
                        path: p.to_path_buf(),
                        source,
                    })?;
                Some(FileSink {
                    writer: Mutex::new(BufWriter::new(file)),
                    path: p.to_path_buf(),
                })
            }
            None => None,
        };

        Ok(Self { min_level, file })
    }

    /// Build from a raw minimum-level string, as read from the
    /// environment.
    ///
    /// An unknown level is an [`InitError::Level`]; callers are expected
    /// to substitute `info` and retry (config resolution does exactly
    /// that, so this surface is for callers parsing levels themselves).
    ///
    /// ```
    /// use daylog::{InitError, Logger};
    ///
    /// fn stdout_logger_at(level: &str) -> Result<Logger, InitError> {
    ///     Logger::build_with_level(None, level)
    /// }
    ///
    /// assert!(stdout_logger_at("warn").is_ok());
    /// assert!(matches!(stdout_logger_at("loud"), Err(InitError::Level(_))));
    /// ```
    pub fn build_with_level(path: Option<&Path>, min_level: &str) -> Result<Self, InitError> {
        Self::build(path, min_level.parse::<Level>()?)
    }

    /// Infallible stdout-only logger, used before init and for empty
    /// `LOG_PATH` configurations.
    pub fn stdout_only(min_level: Level) -> Self {
        Self {
            min_level,
            file: None,
        }
    }

    /// Path of the file sink, if one is active.
    pub fn file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(|f| f.path.as_path())
    }

    /// Minimum severity this logger emits.
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Emit a record with structured fields.
    #[track_caller]
    pub fn log(&self, level: Level, message: &str, fields: &[Field]) {
        let caller = Location::caller();
        self.write(level, &record::short_caller(caller.file(), caller.line()), message, fields);
    }

    #[track_caller]
    pub fn debug(&self, message: &str) {
        let caller = Location::caller();
        self.write(Level::Debug, &record::short_caller(caller.file(), caller.line()), message, &[]);
    }

    #[track_caller]
    pub fn info(&self, message: &str) {
        let caller = Location::caller();
        self.write(Level::Info, &record::short_caller(caller.file(), caller.line()), message, &[]);
    }

    #[track_caller]
    pub fn warn(&self, message: &str) {
        let caller = Location::caller();
        self.write(Level::Warn, &record::short_caller(caller.file(), caller.line()), message, &[]);
    }

    #[track_caller]
    pub fn error(&self, message: &str) {
        let caller = Location::caller();
        self.write(Level::Error, &record::short_caller(caller.file(), caller.line()), message, &[]);
    }

    /// Emit at the highest severity and flush immediately.
    #[track_caller]
    pub fn fatal(&self, message: &str) {
        let caller = Location::caller();
        self.write(Level::Fatal, &record::short_caller(caller.file(), caller.line()), message, &[]);
        self.flush();
    }

    /// Emit with an explicit call-site string. Used by the `log` facade
    /// bridge, which carries its own file/line metadata.
    pub(crate) fn write(&self, level: Level, caller: &str, message: &str, fields: &[Field]) {
        if level < self.min_level {
            return;
        }

        let line = record::encode(level, caller, message, fields);

        {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let _ = writeln!(out, "{line}");
        }

        if let Some(sink) = &self.file {
            if let Ok(mut writer) = sink.writer.lock() {
                let _ = writeln!(writer, "{line}");
            }
        }
    }

    /// Drain buffered records to the file sink.
    pub fn flush(&self) {
        if let Some(sink) = &self.file {
            if let Ok(mut writer) = sink.writer.lock() {
                let _ = writer.flush();
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_build_opens_file_in_append_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2026-08-27");
        fs::write(&path, "existing line\n").unwrap();

        let logger = Logger::build(Some(&path), Level::Info).unwrap();
        logger.info("appended line");
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("existing line\n"));
        assert!(contents.contains("appended line"));
    }

    #[test]
    fn test_build_with_level_rejects_unknown_levels() {
        let err = Logger::build_with_level(None, "verbose").unwrap_err();
        assert!(matches!(err, InitError::Level(_)));

        let logger = Logger::build_with_level(None, "WARN").unwrap();
        assert_eq!(logger.min_level(), Level::Warn);
        assert!(logger.file_path().is_none());
    }

    #[test]
    fn test_build_fails_when_path_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = Logger::build(Some(dir.path()), Level::Info).unwrap_err();
        assert!(matches!(err, InitError::Sink { .. }));
    }

    #[test]
    fn test_level_filtering_applies_to_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filtered");
        let logger = Logger::build(Some(&path), Level::Warn).unwrap();

        logger.debug("too quiet");
        logger.info("still too quiet");
        logger.warn("loud enough");
        logger.error("definitely loud");
        logger.flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("too quiet"));
        assert!(contents.contains("loud enough"));
        assert!(contents.contains("definitely loud"));
    }

    #[test]
    fn test_stdout_only_has_no_file_sink() {
        let logger = Logger::stdout_only(Level::Debug);
        assert!(logger.file_path().is_none());
        // Must not panic without a file sink.
        logger.info("stdout only");
        logger.flush();
    }

    #[test]
    fn test_drop_flushes_buffered_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dropped");
        {
            let logger = Logger::build(Some(&path), Level::Info).unwrap();
            logger.info("buffered");
        }
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("buffered"));
    }
}
