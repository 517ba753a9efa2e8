//! Logging subsystem startup.
//!
//! # Responsibilities
//! - Build and install the first logger from resolved configuration
//! - Start the rotation monitor when a file sink is configured
//! - Register the `log` facade bridge
//!
//! # Design Decisions
//! - Fail fast: a file sink that cannot be opened at startup is fatal and
//!   propagated to the caller
//! - Ordered bring-up: logger first, then the monitor, so the monitor
//!   always observes a fully installed instance

use crate::config::LogConfig;
use crate::lifecycle::shutdown::{FlushGuard, Shutdown};
use crate::logger::bridge;
use crate::logger::factory::{InitError, Logger};
use crate::logger::handle;
use crate::rotation::monitor::RotationMonitor;
use crate::rotation::path;

/// Build and install the process-wide logger described by `config`.
///
/// With a file sink configured this also spawns the rotation monitor, so
/// it must run inside a Tokio runtime. The returned guard stops the
/// monitor and flushes the active logger when dropped.
pub fn init(config: &LogConfig) -> Result<FlushGuard, InitError> {
    let logger = match &config.directory {
        Some(dir) => Logger::build(Some(&path::current_path(dir)), config.min_level)?,
        None => Logger::stdout_only(config.min_level),
    };

    let active = handle::global();
    active.install(logger);
    bridge::install_log_facade(active.clone());

    let shutdown = Shutdown::new();
    if let Some(dir) = &config.directory {
        let monitor = RotationMonitor::new(active, dir.clone(), config.min_level);
        tokio::spawn(monitor.run(shutdown.subscribe()));
    }

    Ok(FlushGuard::new(shutdown))
}
