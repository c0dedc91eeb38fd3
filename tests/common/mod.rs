#![allow(dead_code)]

pub mod cli;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sumplog::{Clock, EventLog, ManualClock};
use tempfile::TempDir;

/// A file-backed log on a manual clock, cleaned up on drop.
pub struct TestLog {
    pub dir: TempDir,
    pub log: EventLog,
    pub clock: Arc<ManualClock>,
}

impl TestLog {
    pub fn new(epoch: i64) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let clock = Arc::new(ManualClock::new(epoch));
        let log = EventLog::open_with_clock(
            dir.path().join("sumplog.db"),
            Arc::clone(&clock) as Arc<dyn Clock>,
        )
        .expect("open log");
        Self { dir, log, clock }
    }

    pub fn db_path(&self) -> std::path::PathBuf {
        self.dir.path().join("sumplog.db")
    }

    /// Save one event stamped at `epoch`.
    pub fn save_at(&self, epoch: i64, action: &str, result: &str) -> i64 {
        self.clock.set(epoch);
        self.log.save_log(action, result).expect("save")
    }
}

pub fn at(epoch: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(epoch, 0).expect("valid epoch")
}
