//! Date-change rotation monitor.
//!
//! # Responsibilities
//! - Poll the wall clock on a fixed interval
//! - Rebuild and install the logger when the calendar day changes
//! - Keep the previous logger serving when rotation fails
//!
//! # Design Decisions
//! - Polling instead of a timer armed for midnight: tolerates system
//!   clock adjustments and keeps the loop trivial; the 1s granularity
//!   bounds rotation lag to one second past the day boundary
//! - Rotation failure is never fatal: the failure is recorded through the
//!   still-active logger and the attempt repeats on the next tick

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time;

use crate::config::Level;
use crate::logger::factory::Logger;
use crate::logger::handle::ActiveLoggerHandle;
use crate::logger::record::Field;
use crate::rotation::path;

/// Production polling interval.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Background task that swaps the active logger at day boundaries.
pub struct RotationMonitor {
    handle: Arc<ActiveLoggerHandle>,
    directory: PathBuf,
    min_level: Level,
    tick: Duration,
}

impl RotationMonitor {
    pub fn new(handle: Arc<ActiveLoggerHandle>, directory: PathBuf, min_level: Level) -> Self {
        Self {
            handle,
            directory,
            min_level,
            tick: TICK_INTERVAL,
        }
    }

    /// Override the polling interval. Tests shrink it to force rotation
    /// promptly; production keeps [`TICK_INTERVAL`].
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Run until the shutdown signal fires. Idle between ticks; rotates at
    /// most once per tick.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        let mut ticker = time::interval(self.tick);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.needs_rotation() {
                        self.rotate();
                    }
                }
                _ = shutdown.recv() => {
                    break;
                }
            }
        }
    }

    /// True when the stamp in the active file path is not today's.
    fn needs_rotation(&self) -> bool {
        let active = self.handle.get();
        match active.file_path().and_then(path::date_stamp_of) {
            Some(stamp) => stamp != path::today_stamp(),
            // Stdout-only logger; nothing to rotate.
            None => false,
        }
    }

    fn rotate(&self) {
        let new_path = path::current_path(&self.directory);
        match Logger::build(Some(&new_path), self.min_level) {
            Ok(logger) => {
                self.handle.install(logger);
                self.handle.get().info("log file rotated");
            }
            Err(err) => {
                // The previous logger stays installed and keeps serving;
                // the next tick retries.
                self.handle.get().log(
                    Level::Error,
                    "log rotation failed; keeping current log file",
                    &[Field::new("error", err.to_string())],
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor_for(handle: Arc<ActiveLoggerHandle>, dir: PathBuf) -> RotationMonitor {
        RotationMonitor::new(handle, dir, Level::Debug).with_tick(Duration::from_millis(10))
    }

    #[test]
    fn test_no_rotation_needed_for_todays_path() {
        let dir = tempfile::tempdir().unwrap();
        let today = path::current_path(dir.path());
        let handle = Arc::new(ActiveLoggerHandle::new(
            Logger::build(Some(&today), Level::Debug).unwrap(),
        ));
        let monitor = monitor_for(handle, dir.path().to_path_buf());
        assert!(!monitor.needs_rotation());
    }

    #[test]
    fn test_rotation_needed_for_stale_path() {
        let dir = tempfile::tempdir().unwrap();
        let stale = dir.path().join("2001-01-01");
        let handle = Arc::new(ActiveLoggerHandle::new(
            Logger::build(Some(&stale), Level::Debug).unwrap(),
        ));
        let monitor = monitor_for(handle, dir.path().to_path_buf());
        assert!(monitor.needs_rotation());
    }

    #[test]
    fn test_stdout_only_logger_never_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let handle = Arc::new(ActiveLoggerHandle::new(Logger::stdout_only(Level::Debug)));
        let monitor = monitor_for(handle, dir.path().to_path_buf());
        assert!(!monitor.needs_rotation());
    }
}
