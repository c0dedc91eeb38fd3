//! Doctor command implementation.
//!
//! Opens the database read-only, so running it never creates the table.

use crate::config::Config;
use crate::error::{Result, SumplogError};
use crate::format::format_epoch;
use crate::storage::{LOGS_COLUMNS, layout_problems};
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warn,
    Error,
}

#[derive(Debug, Clone, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
struct DoctorReport {
    ok: bool,
    checks: Vec<CheckResult>,
}

fn push_check(
    checks: &mut Vec<CheckResult>,
    name: &str,
    status: CheckStatus,
    message: Option<String>,
    details: Option<serde_json::Value>,
) {
    checks.push(CheckResult {
        name: name.to_string(),
        status,
        message,
        details,
    });
}

fn has_error(checks: &[CheckResult]) -> bool {
    checks
        .iter()
        .any(|check| matches!(check.status, CheckStatus::Error))
}

fn print_report(report: &DoctorReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&report)?);
        return Ok(());
    }

    println!("sumplog doctor");
    for check in &report.checks {
        let label = match check.status {
            CheckStatus::Ok => "OK",
            CheckStatus::Warn => "WARN",
            CheckStatus::Error => "ERROR",
        };
        if let Some(message) = &check.message {
            println!("{label} {}: {}", check.name, message);
        } else {
            println!("{label} {}", check.name);
        }
    }
    Ok(())
}

fn check_layout(conn: &Connection, checks: &mut Vec<CheckResult>) -> Result<bool> {
    let problems = layout_problems(conn).map_err(SumplogError::Read)?;
    if problems.is_empty() {
        let columns: Vec<&str> = LOGS_COLUMNS.iter().map(|(name, _)| *name).collect();
        push_check(
            checks,
            "schema.logs",
            CheckStatus::Ok,
            None,
            Some(serde_json::json!({ "columns": columns })),
        );
        Ok(true)
    } else {
        push_check(
            checks,
            "schema.logs",
            CheckStatus::Error,
            Some(problems.join("; ")),
            Some(serde_json::json!({ "problems": problems })),
        );
        Ok(false)
    }
}

fn check_integrity(conn: &Connection, checks: &mut Vec<CheckResult>) -> Result<()> {
    let result: String = conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))
        .map_err(SumplogError::Read)?;
    if result.trim().eq_ignore_ascii_case("ok") {
        push_check(
            checks,
            "sqlite.integrity_check",
            CheckStatus::Ok,
            None,
            None,
        );
    } else {
        push_check(
            checks,
            "sqlite.integrity_check",
            CheckStatus::Error,
            Some(result),
            None,
        );
    }
    Ok(())
}

fn check_events(conn: &Connection, checks: &mut Vec<CheckResult>) -> Result<()> {
    let count: i64 = conn
        .query_row("SELECT count(*) FROM logs", [], |row| row.get(0))
        .map_err(SumplogError::Read)?;
    let latest: Option<i64> = conn
        .query_row(
            "SELECT epoch FROM logs ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .map_err(SumplogError::Read)?;

    match latest {
        Some(epoch) => push_check(
            checks,
            "events.count",
            CheckStatus::Ok,
            Some(format!("{count} event(s), latest at {}", format_epoch(epoch))),
            Some(serde_json::json!({ "count": count, "latest_epoch": epoch })),
        ),
        None => push_check(
            checks,
            "events.count",
            CheckStatus::Warn,
            Some("No events recorded yet".to_string()),
            Some(serde_json::json!({ "count": count })),
        ),
    }
    Ok(())
}

fn collect_checks(db_path: &Path) -> Result<Vec<CheckResult>> {
    let mut checks = Vec::new();

    if !db_path.exists() {
        push_check(
            &mut checks,
            "db.exists",
            CheckStatus::Error,
            Some(format!(
                "Missing {} (run `sumplog init`)",
                db_path.display()
            )),
            None,
        );
        return Ok(checks);
    }

    match Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY) {
        Ok(conn) => {
            if check_layout(&conn, &mut checks)? {
                check_events(&conn, &mut checks)?;
            }
            check_integrity(&conn, &mut checks)?;
        }
        Err(err) => {
            push_check(
                &mut checks,
                "db.open",
                CheckStatus::Error,
                Some(format!("Failed to open DB read-only: {err}")),
                Some(serde_json::json!({ "path": db_path.display().to_string() })),
            );
        }
    }

    Ok(checks)
}

/// Execute the doctor command.
///
/// # Errors
///
/// Returns an error if report serialization fails or a check query fails.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let checks = if config.is_in_memory() {
        let mut checks = Vec::new();
        push_check(
            &mut checks,
            "db.exists",
            CheckStatus::Warn,
            Some("In-memory database; nothing persisted to check".to_string()),
            None,
        );
        checks
    } else {
        collect_checks(&config.database)?
    };

    let report = DoctorReport {
        ok: !has_error(&checks),
        checks,
    };
    print_report(&report, json)?;

    if !report.ok {
        std::process::exit(1);
    }

    Ok(())
}
