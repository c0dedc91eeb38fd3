//! In-memory event log backed by a `Vec`.
//!
//! Mirrors the SQLite log's id, epoch and range semantics without any
//! database dependency. Nothing is persisted.

use std::convert::Infallible;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::logger::EventLogger;
use crate::model::Event;

/// In-memory action/result log.
#[derive(Debug)]
pub struct InMemoryEventLog {
    events: Mutex<Vec<Event>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryEventLog {
    /// Create an empty log on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            clock,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl Default for InMemoryEventLog {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLogger for InMemoryEventLog {
    type Error = Infallible;

    fn save_log(&self, action: &str, result: &str) -> Result<i64, Infallible> {
        let epoch = self.clock.unix_now();
        let mut events = self.events.lock();
        let id = events.last().map_or(1, |last| last.id + 1);
        events.push(Event::new(id, epoch, action, result));
        tracing::trace!(id, epoch, action, result, "Recorded in-memory event");
        Ok(id)
    }

    fn latest(&self) -> Result<Option<Event>, Infallible> {
        Ok(self.events.lock().last().cloned())
    }

    fn get_all_logs(&self) -> Result<Vec<Event>, Infallible> {
        Ok(self.events.lock().clone())
    }

    fn get_logs_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Event>, Infallible> {
        let (start, end) = (start.timestamp(), end.timestamp());
        Ok(self
            .events
            .lock()
            .iter()
            .filter(|event| event.within(start, end))
            .cloned()
            .collect())
    }

    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}
