//! Rotation subsystem.
//!
//! # Data Flow
//! ```text
//! monitor.rs (1s tick)
//!     → compare today's stamp with the stamp in the active file path
//!     → on mismatch: path.rs (resolve new path)
//!     → logger::factory (build replacement)
//!     → logger::handle (atomic install, flush superseded instance)
//! ```
//!
//! # Design Decisions
//! - The date encoded in the file name is the single source of truth for
//!   what day the active logger belongs to
//! - The monitor is the only writer of the handle after startup

pub mod monitor;
pub mod path;

pub use monitor::RotationMonitor;
