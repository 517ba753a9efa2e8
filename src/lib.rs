//! daylog: process-wide structured logging with daily file rotation.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────────┐
//!                 │                     DAYLOG                       │
//!                 │                                                  │
//!   LOG_PATH      │  ┌─────────┐    ┌──────────┐    ┌────────────┐  │
//!   LOG_LEVEL ────┼─▶│ config  │───▶│ rotation │───▶│  logger::  │  │
//!   .env file     │  │ loader  │    │  path    │    │  factory   │  │
//!                 │  └─────────┘    └──────────┘    └─────┬──────┘  │
//!                 │                                       │         │
//!                 │                                       ▼         │
//!   log calls     │  ┌──────────────┐            ┌────────────────┐ │     logs/YYYY-MM-DD
//!   ──────────────┼─▶│  logger::    │───────────▶│ file + stdout  │─┼──▶  + stdout
//!                 │  │  handle      │            │     sinks      │ │
//!                 │  └──────▲───────┘            └────────────────┘ │
//!                 │         │ swap at day boundary                  │
//!                 │  ┌──────┴───────┐    ┌───────────────────────┐  │
//!                 │  │  rotation::  │    │      lifecycle        │  │
//!                 │  │  monitor     │◀───│  init / FlushGuard    │  │
//!                 │  └──────────────┘    └───────────────────────┘  │
//!                 └──────────────────────────────────────────────────┘
//! ```
//!
//! The handle is the single piece of shared mutable state: an atomic
//! pointer swap replaces the whole logger at day boundaries while
//! concurrent callers keep logging, with no lost or torn lines.
//!
//! # Usage
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), daylog::InitError> {
//! let config = daylog::config::resolve();
//! let _guard = daylog::init(&config)?;
//!
//! daylog::logger().info("service starting");
//! daylog::logger().log(
//!     daylog::Level::Warn,
//!     "cache miss",
//!     &[daylog::Field::new("key", "user:42")],
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod lifecycle;
pub mod logger;
pub mod rotation;

pub use config::{Level, LogConfig};
pub use lifecycle::{init, FlushGuard, Shutdown};
pub use logger::{logger, ActiveLoggerHandle, Field, InitError, Logger};
pub use rotation::RotationMonitor;
