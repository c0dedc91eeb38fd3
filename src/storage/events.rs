//! SQLite-backed event log.
//!
//! [`EventLog`] owns a single connection behind a mutex; every statement
//! runs while the lock is held, so one handle can be shared across threads
//! through an `Arc`.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params};
use sumplog_lib::{Clock, Event, EventLogger, Liveness, SystemClock};

use crate::error::{Result, SumplogError};
use crate::storage::schema;

/// Location string that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

const INSERT_EVENT_SQL: &str = "INSERT INTO logs(epoch, action, result) VALUES (?1, ?2, ?3)";
const LATEST_EVENT_SQL: &str =
    "SELECT id, epoch, action, result FROM logs ORDER BY id DESC LIMIT 1";
const ALL_EVENTS_SQL: &str = "SELECT id, epoch, action, result FROM logs ORDER BY id ASC";
const EVENTS_BETWEEN_SQL: &str = "SELECT id, epoch, action, result FROM logs \
     WHERE epoch >= ?1 AND epoch <= ?2 ORDER BY id ASC";
const COUNT_EVENTS_SQL: &str = "SELECT count(*) FROM logs";

/// Persistent action/result log.
#[derive(Debug)]
pub struct EventLog {
    conn: Mutex<Connection>,
    clock: Arc<dyn Clock>,
    location: String,
}

impl EventLog {
    /// Open (or create) the log at `location` and ensure the table exists.
    ///
    /// `location` is a filesystem path or [`IN_MEMORY`]. Opening the same
    /// location again leaves existing events untouched.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Init` if the database cannot be opened or the
    /// table cannot be created.
    pub fn open(location: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_clock(location, Arc::new(SystemClock))
    }

    /// Open a private in-memory log.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Init` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self> {
        Self::open(IN_MEMORY)
    }

    /// Open the log with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Init` if the database cannot be opened or the
    /// table cannot be created.
    pub fn open_with_clock(location: impl AsRef<Path>, clock: Arc<dyn Clock>) -> Result<Self> {
        let path = location.as_ref();
        let location = path.display().to_string();

        let conn = Connection::open(path).map_err(|e| SumplogError::init(&location, e))?;
        schema::apply_schema(&conn).map_err(|e| SumplogError::init(&location, e))?;
        tracing::info!(location = %location, table = schema::LOGS_TABLE, "Ensured event table");

        Ok(Self {
            conn: Mutex::new(conn),
            clock,
            location,
        })
    }

    /// Where this log is stored, as given to `open`.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Record an event stamped with the current time.
    ///
    /// Returns the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Write` if the insert cannot be prepared or
    /// executed.
    pub fn save_log(&self, action: &str, result: &str) -> Result<i64> {
        let epoch = self.clock.unix_now();
        let conn = self.conn.lock();
        let mut stmt = conn
            .prepare_cached(INSERT_EVENT_SQL)
            .map_err(SumplogError::Write)?;
        stmt.execute(params![epoch, action, result])
            .map_err(SumplogError::Write)?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, epoch, action, result, "Recorded event");
        Ok(id)
    }

    /// The most recently inserted event (highest id), if any.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the query fails.
    pub fn latest(&self) -> Result<Option<Event>> {
        let conn = self.conn.lock();
        conn.query_row(LATEST_EVENT_SQL, [], event_from_row)
            .optional()
            .map_err(SumplogError::Read)
    }

    /// Classify the latest event against the one-hour liveness window.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the latest event cannot be read.
    pub fn liveness(&self) -> Result<Liveness> {
        let latest = self.latest()?.map(|event| event.epoch);
        let liveness = Liveness::evaluate(latest, self.clock.unix_now());
        tracing::debug!(state = liveness.as_str(), last_epoch = ?latest, "Checked liveness");
        Ok(liveness)
    }

    /// Has an event been recorded in the last hour?
    ///
    /// An empty log reports alive; use [`EventLog::liveness`] to tell the
    /// two apart.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the latest event cannot be read.
    pub fn alive(&self) -> Result<bool> {
        Ok(self.liveness()?.is_alive())
    }

    /// Every event, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the scan fails or any row cannot be
    /// decoded; no partial result is returned.
    pub fn get_all_logs(&self) -> Result<Vec<Event>> {
        let conn = self.conn.lock();
        let events = query_events(&conn, ALL_EVENTS_SQL, [])?;
        tracing::debug!(count = events.len(), "Loaded all events");
        Ok(events)
    }

    /// Events with `start <= epoch <= end`, ascending by id.
    ///
    /// Bounds are truncated to whole seconds. Swapped bounds match nothing.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the scan fails or any row cannot be
    /// decoded; no partial result is returned.
    pub fn get_logs_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Event>> {
        let (start, end) = (start.timestamp(), end.timestamp());
        let conn = self.conn.lock();
        let events = query_events(&conn, EVENTS_BETWEEN_SQL, params![start, end])?;
        tracing::debug!(start, end, count = events.len(), "Loaded events in range");
        Ok(events)
    }

    /// Number of stored events.
    ///
    /// # Errors
    ///
    /// Returns `SumplogError::Read` if the count query fails.
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row(COUNT_EVENTS_SQL, [], |row| row.get(0))
            .map_err(SumplogError::Read)?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}

impl EventLogger for EventLog {
    type Error = SumplogError;

    fn save_log(&self, action: &str, result: &str) -> Result<i64> {
        Self::save_log(self, action, result)
    }

    fn latest(&self) -> Result<Option<Event>> {
        Self::latest(self)
    }

    fn get_all_logs(&self) -> Result<Vec<Event>> {
        Self::get_all_logs(self)
    }

    fn get_logs_between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Vec<Event>> {
        Self::get_logs_between(self, start, end)
    }

    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

fn event_from_row(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        epoch: row.get(1)?,
        action: row.get(2)?,
        result: row.get(3)?,
    })
}

fn query_events(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare_cached(sql).map_err(SumplogError::Read)?;
    let rows = stmt
        .query_map(params, event_from_row)
        .map_err(SumplogError::Read)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(SumplogError::Read)
}
