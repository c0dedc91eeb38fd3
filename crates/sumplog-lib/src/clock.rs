//! Wall-clock sources.
//!
//! Event logs read the current time through a [`Clock`] so that tests can
//! pin it. Production code always uses [`SystemClock`].

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;

    /// Current time as Unix seconds.
    fn unix_now(&self) -> i64 {
        self.now().timestamp()
    }
}

/// The real system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    epoch: AtomicI64,
}

impl ManualClock {
    #[must_use]
    pub const fn new(epoch: i64) -> Self {
        Self {
            epoch: AtomicI64::new(epoch),
        }
    }

    pub fn set(&self, epoch: i64) {
        self.epoch.store(epoch, Ordering::SeqCst);
    }

    /// Move the clock by `secs` (negative values move it backwards).
    pub fn advance(&self, secs: i64) {
        self.epoch.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.unix_now(), 0).unwrap_or_default()
    }

    fn unix_now(&self) -> i64 {
        self.epoch.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_set_and_advance() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.unix_now(), 100);
        clock.advance(50);
        assert_eq!(clock.now().timestamp(), 150);
        clock.advance(-200);
        assert_eq!(clock.unix_now(), -50);
        clock.set(300);
        assert_eq!(clock.unix_now(), 300);
    }

    #[test]
    fn test_system_clock_is_close_to_utc_now() {
        let before = Utc::now().timestamp();
        let now = SystemClock.unix_now();
        let after = Utc::now().timestamp();
        assert!(before <= now && now <= after);
    }
}
