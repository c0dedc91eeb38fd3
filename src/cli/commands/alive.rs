//! Alive command implementation.
//!
//! Exits with status 1 when the log is stale so it can be used directly
//! from cron jobs and health checks.

use crate::config::{self, Config};
use crate::error::Result;
use crate::format::{LivenessReport, format_liveness};
use sumplog_lib::{Clock, SystemClock};

/// Execute the alive command.
///
/// # Errors
///
/// Returns an error if the log is not initialized or cannot be read.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let log = config::open_existing(config)?;
    let liveness = log.liveness()?;
    let now = SystemClock.now();

    if json {
        let report = LivenessReport::new(liveness, now.timestamp());
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", format_liveness(&liveness, now));
    }

    if !liveness.is_alive() {
        std::process::exit(1);
    }
    Ok(())
}
