//! Liveness policy.
//!
//! A log is alive when its most recent event (by id, not by epoch) was
//! captured strictly less than [`LIVENESS_WINDOW_SECS`] ago.

use serde::Serialize;

/// Width of the liveness window: one hour.
pub const LIVENESS_WINDOW_SECS: i64 = 60 * 60;

/// Outcome of a liveness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Liveness {
    /// Latest event falls inside the window.
    Alive { last_epoch: i64 },
    /// Latest event is older than the window.
    Stale { last_epoch: i64 },
    /// No event has ever been recorded.
    Empty,
}

impl Liveness {
    /// Classify the latest epoch against `now` (both Unix seconds).
    #[must_use]
    pub const fn evaluate(latest_epoch: Option<i64>, now: i64) -> Self {
        match latest_epoch {
            None => Self::Empty,
            Some(last_epoch) if last_epoch > now - LIVENESS_WINDOW_SECS => {
                Self::Alive { last_epoch }
            }
            Some(last_epoch) => Self::Stale { last_epoch },
        }
    }

    /// Boolean view of the check.
    ///
    /// An empty log counts as alive: it is treated as if the latest entry
    /// were recorded right now.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive { .. } | Self::Empty)
    }

    #[must_use]
    pub const fn last_epoch(self) -> Option<i64> {
        match self {
            Self::Alive { last_epoch } | Self::Stale { last_epoch } => Some(last_epoch),
            Self::Empty => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alive { .. } => "alive",
            Self::Stale { .. } => "stale",
            Self::Empty => "empty",
        }
    }
}
