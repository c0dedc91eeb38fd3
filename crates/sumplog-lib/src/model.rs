//! Core data types for sumplog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted action/result record.
///
/// `id` is assigned by the store on insert and only grows; `epoch` is the
/// Unix time (seconds) captured when the event was saved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub epoch: i64,
    pub action: String,
    pub result: String,
}

impl Event {
    #[must_use]
    pub fn new(id: i64, epoch: i64, action: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id,
            epoch,
            action: action.into(),
            result: result.into(),
        }
    }

    /// The capture time as a UTC timestamp.
    ///
    /// Epochs outside chrono's representable range fall back to the Unix epoch.
    #[must_use]
    pub fn recorded_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.epoch, 0).unwrap_or_default()
    }

    /// True if `epoch` lies in the closed range `[start, end]`.
    #[must_use]
    pub const fn within(&self, start: i64, end: i64) -> bool {
        start <= self.epoch && self.epoch <= end
    }
}
