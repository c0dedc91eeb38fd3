//! List command implementation.
//!
//! Without bounds every event is listed; with `--since` and/or `--until`
//! only events inside the closed range are shown.

use crate::cli::ListArgs;
use crate::config::{self, Config};
use crate::error::{Result, SumplogError};
use crate::format::format_event_line;
use chrono::{DateTime, Utc};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a bound cannot be parsed, the log is not
/// initialized, or the query fails.
pub fn execute(args: &ListArgs, config: &Config, json: bool) -> Result<()> {
    let range = resolve_range(args, Utc::now())?;
    let log = config::open_existing(config)?;

    let events = match range {
        Some((start, end)) => log.get_logs_between(start, end)?,
        None => log.get_all_logs()?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else if events.is_empty() {
        println!("No events found.");
    } else {
        for event in &events {
            println!("{}", format_event_line(event));
        }
        println!("\n{} event(s)", events.len());
    }

    Ok(())
}

/// Turn the optional bounds into a range; a missing bound defaults to the
/// Unix epoch (start) or `now` (end).
fn resolve_range(
    args: &ListArgs,
    now: DateTime<Utc>,
) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>> {
    if args.since.is_none() && args.until.is_none() {
        return Ok(None);
    }
    let start = args
        .since
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or_default();
    let end = args
        .until
        .as_deref()
        .map(parse_timestamp)
        .transpose()?
        .unwrap_or(now);
    Ok(Some((start, end)))
}

/// Parse Unix seconds or an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `InvalidTimestamp` if the value is neither.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    let invalid = || SumplogError::InvalidTimestamp {
        value: value.to_string(),
    };

    if let Ok(secs) = trimmed.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0).ok_or_else(invalid);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(since: Option<&str>, until: Option<&str>) -> ListArgs {
        ListArgs {
            since: since.map(str::to_string),
            until: until.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_timestamp_epoch_and_rfc3339() {
        assert_eq!(parse_timestamp("150").unwrap().timestamp(), 150);
        assert_eq!(
            parse_timestamp("1970-01-01T00:02:30Z").unwrap().timestamp(),
            150
        );
        assert_eq!(
            parse_timestamp("1970-01-01T01:02:30+01:00")
                .unwrap()
                .timestamp(),
            150
        );
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, SumplogError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_resolve_range_defaults() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        assert!(resolve_range(&args(None, None), now).unwrap().is_none());

        let (start, end) = resolve_range(&args(Some("150"), None), now)
            .unwrap()
            .unwrap();
        assert_eq!((start.timestamp(), end.timestamp()), (150, 1_000));

        let (start, end) = resolve_range(&args(None, Some("250")), now)
            .unwrap()
            .unwrap();
        assert_eq!((start.timestamp(), end.timestamp()), (0, 250));
    }

    #[test]
    fn test_resolve_range_keeps_swapped_bounds() {
        let now = DateTime::from_timestamp(1_000, 0).unwrap();
        let (start, end) = resolve_range(&args(Some("250"), Some("150")), now)
            .unwrap()
            .unwrap();
        assert!(start > end);
    }
}
