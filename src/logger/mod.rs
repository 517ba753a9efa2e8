//! Logger subsystem.
//!
//! # Data Flow
//! ```text
//! caller
//!     → handle.rs (lock-free load of the active instance)
//!     → factory.rs (level filter, sink writes)
//!     → record.rs (console-style encoding)
//!
//! rotation monitor
//!     → factory.rs (build replacement instance)
//!     → handle.rs (atomic install, flush superseded instance)
//!
//! log::info! et al.
//!     → bridge.rs (facade adapter) → handle.rs → ...
//! ```
//!
//! # Design Decisions
//! - Logger instances are immutable; all reconfiguration is swap-not-mutate
//! - Both sinks (file + stdout) are always active when a file is configured
//! - Record encoding is console-style text, not a machine format

pub mod bridge;
pub mod factory;
pub mod handle;
pub mod record;

pub use factory::{InitError, Logger};
pub use handle::{logger, ActiveLoggerHandle};
pub use record::Field;
