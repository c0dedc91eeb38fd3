//! Output formatting for `sumplog`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Events serialize as-is; the report types below cover everything else:
//! - [`LivenessReport`] - Liveness check (alive)
//! - [`SavedEvent`] - Newly recorded event id (save)
//! - [`InitReport`] - Opened log location and size (init)

mod output;
mod text;

pub use output::{InitReport, LivenessReport, SavedEvent};
pub use text::{format_age, format_epoch, format_event_line, format_liveness, format_liveness_icon};
