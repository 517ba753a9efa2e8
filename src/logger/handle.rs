//! Shared handle to the active logger.
//!
//! # Responsibilities
//! - Lock-free access to the current logger on every log call
//! - Single-writer replacement during rotation
//! - Process-wide accessor with a stdout-only fallback before init
//!
//! # Design Decisions
//! - `ArcSwap` rather than a mutex: reads happen on every log call and
//!   must not contend with each other
//! - Readers in flight keep the superseded instance alive; the swap
//!   flushes it after installation, not before, and its `Drop` flushes
//!   again when the last reference goes away

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::config::Level;
use crate::logger::factory::Logger;

/// Swappable reference to the current logger.
///
/// Mutation is single-writer: only startup code and the rotation monitor
/// call [`install`](Self::install).
pub struct ActiveLoggerHandle {
    inner: ArcSwap<Logger>,
}

impl ActiveLoggerHandle {
    pub fn new(initial: Logger) -> Self {
        Self {
            inner: ArcSwap::from_pointee(initial),
        }
    }

    /// Load the current logger. Never blocks, never fails.
    pub fn get(&self) -> Arc<Logger> {
        self.inner.load_full()
    }

    /// Install a replacement, then flush the superseded instance.
    pub fn install(&self, logger: Logger) {
        let old = self.inner.swap(Arc::new(logger));
        old.flush();
    }
}

static ACTIVE: OnceLock<Arc<ActiveLoggerHandle>> = OnceLock::new();

/// Process-wide handle. Stdout-only at `info` until `init` installs a
/// configured logger, so logging works at any point in the process.
pub fn global() -> Arc<ActiveLoggerHandle> {
    ACTIVE
        .get_or_init(|| Arc::new(ActiveLoggerHandle::new(Logger::stdout_only(Level::Info))))
        .clone()
}

/// Current process-wide logger.
pub fn logger() -> Arc<Logger> {
    global().get()
}
