//! `sumplog` - action/result event log with a liveness probe
//!
//! Operator CLI over the embedded `SQLite` event log.

use sumplog::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
