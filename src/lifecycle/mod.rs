//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Resolve config → build logger → install → start monitor
//!
//! Shutdown (shutdown.rs):
//!     FlushGuard dropped → monitor stops → active logger flushed
//! ```
//!
//! # Design Decisions
//! - Startup errors are fatal; the process cannot run without its logger
//! - The monitor is abandoned at shutdown, not drained: records written
//!   after the signal are best-effort

pub mod shutdown;
pub mod startup;

pub use shutdown::{FlushGuard, Shutdown};
pub use startup::init;
