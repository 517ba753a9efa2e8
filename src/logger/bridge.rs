//! `log` facade adapter.
//!
//! Routes records emitted through the standard `log` macros into the
//! active logger handle, so dependencies that log via the facade share the
//! rotating sinks.

use std::sync::Arc;

use crate::config::Level;
use crate::logger::handle::ActiveLoggerHandle;
use crate::logger::record;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace | log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

struct FacadeLogger {
    handle: Arc<ActiveLoggerHandle>,
}

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Level::from(metadata.level()) >= self.handle.get().min_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let caller = match (record.file(), record.line()) {
            (Some(file), Some(line)) => record::short_caller(file, line),
            _ => record.target().to_string(),
        };

        self.handle
            .get()
            .write(record.level().into(), &caller, &record.args().to_string(), &[]);
    }

    fn flush(&self) {
        self.handle.get().flush();
    }
}

/// Register the facade for `handle`.
///
/// Best-effort: if another global `log` logger is already set, the
/// existing one is kept. Per-record filtering happens in `enabled`, so the
/// facade's max level is left wide open.
pub fn install_log_facade(handle: Arc<ActiveLoggerHandle>) {
    if log::set_boxed_logger(Box::new(FacadeLogger { handle })).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_level_mapping() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Error), Level::Error);
    }
}
