//! `sumplog` - action/result event log with a liveness probe
//!
//! Records discrete "action/result" events with timestamps in an embedded
//! `SQLite` database and answers whether anything was recorded in the last
//! hour. Meant to be embedded in a monitor (e.g. a sump-pump watcher); the
//! `sumplog` binary is a thin operator CLI over the same API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`storage`] - `SQLite` event log and table layout
//! - [`config`] - Configuration management
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Diagnostic logging setup
//! - [`cli`] - Command-line interface using clap
//!
//! The event model, clock and liveness policy live in `sumplog-lib` and are
//! re-exported here.
//!
//! # Example
//!
//! ```
//! use sumplog::EventLog;
//!
//! let log = EventLog::open_in_memory()?;
//! log.save_log("pump-check", "ok")?;
//! assert!(log.alive()?);
//! # Ok::<(), sumplog::SumplogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod storage;

pub use error::{Result, SumplogError};
pub use storage::EventLog;
pub use sumplog_lib::{
    Clock, Event, EventLogger, InMemoryEventLog, LIVENESS_WINDOW_SECS, Liveness, ManualClock,
    SystemClock,
};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if configuration, logging setup or command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
