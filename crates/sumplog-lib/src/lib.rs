//! `sumplog-lib` — SQLite-free building blocks for the sumplog event log.
//!
//! Provides the [`Event`] record, an injectable [`Clock`], the liveness
//! policy, and the [`EventLogger`] trait shared by every backend. The
//! in-memory backend is handy for testing applications that embed the log
//! without touching the filesystem.
//!
//! # Quick Start
//!
//! ```
//! use sumplog_lib::{EventLogger, InMemoryEventLog};
//!
//! let log = InMemoryEventLog::new();
//! let id = log.save_log("pump-check", "ok").unwrap();
//! assert_eq!(id, 1);
//! assert!(log.alive().unwrap());
//! ```

pub mod clock;
pub mod liveness;
pub mod logger;
pub mod model;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use liveness::{LIVENESS_WINDOW_SECS, Liveness};
pub use logger::EventLogger;
pub use model::Event;
pub use store::InMemoryEventLog;
