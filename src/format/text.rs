//! Text formatting functions for `sumplog`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Liveness icons (✓ ✗ ○)
//! - Event lines
//! - Human-readable ages ("12m", "3h", "2d")

use chrono::{DateTime, SecondsFormat, Utc};
use sumplog_lib::{Event, Liveness};

/// Liveness icon characters.
pub mod icons {
    /// Recent event inside the window.
    pub const ALIVE: &str = "✓";
    /// Latest event is too old.
    pub const STALE: &str = "✗";
    /// Nothing recorded yet.
    pub const EMPTY: &str = "○";
}

/// Return the icon character for a liveness state.
#[must_use]
pub const fn format_liveness_icon(liveness: &Liveness) -> &'static str {
    match liveness {
        Liveness::Alive { .. } => icons::ALIVE,
        Liveness::Stale { .. } => icons::STALE,
        Liveness::Empty => icons::EMPTY,
    }
}

/// Format a duration in seconds as its largest whole unit.
#[must_use]
pub fn format_age(secs: i64) -> String {
    let secs = secs.max(0);
    match secs {
        0..60 => format!("{secs}s"),
        60..3600 => format!("{}m", secs / 60),
        3600..86_400 => format!("{}h", secs / 3600),
        _ => format!("{}d", secs / 86_400),
    }
}

/// Format an epoch as RFC 3339 UTC with second precision.
#[must_use]
pub fn format_epoch(epoch: i64) -> String {
    DateTime::from_timestamp(epoch, 0).map_or_else(
        || epoch.to_string(),
        |ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}

/// Format a single-line event summary.
///
/// Format: `#{id} {timestamp} {action} -> {result}`
#[must_use]
pub fn format_event_line(event: &Event) -> String {
    format!(
        "#{} {} {} -> {}",
        event.id,
        format_epoch(event.epoch),
        event.action,
        event.result,
    )
}

/// Format the liveness check for the terminal.
#[must_use]
pub fn format_liveness(liveness: &Liveness, now: DateTime<Utc>) -> String {
    let icon = format_liveness_icon(liveness);
    match liveness.last_epoch() {
        Some(last) => format!(
            "{icon} {} (last event {} ago at {})",
            liveness.as_str(),
            format_age(now.timestamp() - last),
            format_epoch(last),
        ),
        None => format!("{icon} alive (no events recorded)"),
    }
}
