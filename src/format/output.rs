use serde::{Deserialize, Serialize};
use sumplog_lib::{LIVENESS_WINDOW_SECS, Liveness};

use super::text::format_epoch;

/// Liveness check result for `alive --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessReport {
    pub alive: bool,
    /// `alive`, `stale` or `empty`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_epoch: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<String>,
    pub checked_at: i64,
    pub window_secs: i64,
}

impl LivenessReport {
    #[must_use]
    pub fn new(liveness: Liveness, checked_at: i64) -> Self {
        Self {
            alive: liveness.is_alive(),
            state: liveness.as_str().to_string(),
            last_epoch: liveness.last_epoch(),
            last_seen: liveness.last_epoch().map(format_epoch),
            checked_at,
            window_secs: LIVENESS_WINDOW_SECS,
        }
    }
}

/// Result of `save --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedEvent {
    pub id: i64,
}

/// Result of `init --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitReport {
    pub location: String,
    pub events: u64,
}
