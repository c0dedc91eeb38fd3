//! `SQLite` storage layer for `sumplog`.
//!
//! A single `logs` table holds every event. The table is created on open
//! and never migrated.
//!
//! # Submodules
//!
//! - [`events`] - The event log (insertion, liveness, retrieval)
//! - [`schema`] - Table DDL and layout inspection

pub mod events;
pub mod schema;

pub use events::{EventLog, IN_MEMORY};
pub use schema::{LOGS_COLUMNS, LOGS_TABLE, LOGS_TABLE_SCHEMA, apply_schema, layout_problems};
