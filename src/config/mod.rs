//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (key=value, optional)
//!     → loader.rs (dotenvy load, env lookup)
//!     → default substitution (dir="logs", level=info)
//!     → LogConfig (resolved, immutable)
//!     → consumed once at startup by lifecycle::init
//! ```
//!
//! # Design Decisions
//! - Config is resolved once at process start and never re-read; rotation
//!   only re-derives the file path, not the directory or level
//! - Resolution never fails: every missing or malformed value has a default
//! - Stdout-only mode is a configuration state (empty `LOG_PATH`), not a
//!   separate code path through the subsystem

pub mod loader;
pub mod schema;

pub use loader::resolve;
pub use schema::{Level, LogConfig, ParseLevelError, DEFAULT_LOG_DIR};
