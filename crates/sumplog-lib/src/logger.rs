//! The event log contract shared by every backend.

use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::liveness::Liveness;
use crate::model::Event;

/// An append-only action/result log with a liveness probe.
pub trait EventLogger {
    type Error;

    /// Record an event stamped with the current clock time.
    ///
    /// Returns the store-assigned id of the new event.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the insert fails.
    fn save_log(&self, action: &str, result: &str) -> Result<i64, Self::Error>;

    /// The most recently inserted event (highest id).
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the lookup fails.
    fn latest(&self) -> Result<Option<Event>, Self::Error>;

    /// Every event, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if any row cannot be read.
    fn get_all_logs(&self) -> Result<Vec<Event>, Self::Error>;

    /// Events whose epoch lies in `[start, end]`, ascending by id.
    ///
    /// Swapped bounds select nothing.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if any row cannot be read.
    fn get_logs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, Self::Error>;

    /// The clock used to stamp events and evaluate liveness.
    fn clock(&self) -> &dyn Clock;

    /// Classify the latest event against the liveness window.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the latest event cannot be read.
    fn liveness(&self) -> Result<Liveness, Self::Error> {
        let latest = self.latest()?.map(|event| event.epoch);
        Ok(Liveness::evaluate(latest, self.clock().unix_now()))
    }

    /// Has an event been recorded in the last hour?
    ///
    /// An empty log reports alive.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the latest event cannot be read.
    fn alive(&self) -> Result<bool, Self::Error> {
        Ok(self.liveness()?.is_alive())
    }
}
