mod common;

use std::sync::Arc;
use std::thread;

use common::{TestLog, at};
use rusqlite::Connection;
use sumplog::{EventLog, EventLogger, Liveness, SumplogError};

const NOW: i64 = 1_700_000_000;

#[test]
fn test_two_saves_read_back_in_order() {
    let t = TestLog::new(NOW);
    t.log.save_log("pump-check", "ok").unwrap();
    t.log.save_log("pump-check", "failed").unwrap();

    let all = t.log.get_all_logs().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, 1);
    assert_eq!(all[1].id, 2);
    assert!(all.iter().all(|e| e.action == "pump-check"));
    assert_eq!(all[0].result, "ok");
    assert_eq!(all[1].result, "failed");
}

#[test]
fn test_ids_strictly_increase() {
    let t = TestLog::new(NOW);
    let ids: Vec<i64> = (0..25)
        .map(|i| t.log.save_log("pump-check", &format!("run {i}")).unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]), "{ids:?}");
}

#[test]
fn test_epoch_is_capture_time() {
    let t = TestLog::new(NOW);
    let id = t.log.save_log("pump-check", "ok").unwrap();
    t.clock.advance(3_000);

    let event = t.log.latest().unwrap().expect("latest event");
    assert_eq!(event.id, id);
    assert_eq!(event.epoch, NOW);
}

#[test]
fn test_system_clock_epoch_within_call_window() {
    let log = EventLog::open_in_memory().unwrap();
    let before = chrono::Utc::now().timestamp();
    log.save_log("pump-check", "ok").unwrap();
    let after = chrono::Utc::now().timestamp();

    let epoch = log.latest().unwrap().unwrap().epoch;
    assert!(before <= epoch && epoch <= after);
}

#[test]
fn test_range_scenario() {
    let t = TestLog::new(0);
    for epoch in [100, 200, 300] {
        t.save_at(epoch, "pump-check", "ok");
    }

    let hits = t.log.get_logs_between(at(150), at(250)).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].epoch, 200);
}

#[test]
fn test_swapped_range_is_empty_not_error() {
    let t = TestLog::new(0);
    for epoch in [100, 200, 300] {
        t.save_at(epoch, "pump-check", "ok");
    }
    assert!(t.log.get_logs_between(at(250), at(150)).unwrap().is_empty());
}

#[test]
fn test_range_results_ordered_by_id_not_epoch() {
    let t = TestLog::new(0);
    t.save_at(300, "pump-check", "first");
    t.save_at(100, "pump-check", "second");
    t.save_at(200, "pump-check", "third");

    let results: Vec<String> = t
        .log
        .get_logs_between(at(0), at(1_000))
        .unwrap()
        .into_iter()
        .map(|e| e.result)
        .collect();
    assert_eq!(results, ["first", "second", "third"]);
}

#[test]
fn test_reinit_keeps_existing_events() {
    let t = TestLog::new(NOW);
    t.log.save_log("pump-check", "ok").unwrap();
    t.log.save_log("pump-check", "failed").unwrap();
    let before = t.log.get_all_logs().unwrap();

    let reopened = EventLog::open(t.db_path()).unwrap();
    assert_eq!(reopened.get_all_logs().unwrap(), before);
    let again = EventLog::open(t.db_path()).unwrap();
    assert_eq!(again.get_all_logs().unwrap(), before);
}

#[test]
fn test_liveness_boundary() {
    let t = TestLog::new(NOW - 3599);
    t.log.save_log("pump-check", "ok").unwrap();
    t.clock.set(NOW);
    assert!(t.log.alive().unwrap());

    t.save_at(NOW - 3601, "pump-check", "ok");
    t.clock.set(NOW);
    assert!(!t.log.alive().unwrap());
}

#[test]
fn test_empty_log_reports_alive() {
    let t = TestLog::new(NOW);
    assert!(t.log.alive().unwrap());
    assert_eq!(t.log.liveness().unwrap(), Liveness::Empty);
}

#[test]
fn test_alive_follows_highest_id_after_clock_moves_back() {
    let t = TestLog::new(NOW);
    t.log.save_log("pump-check", "ok").unwrap();
    t.save_at(NOW - 7_200, "pump-check", "ok");
    t.clock.set(NOW);

    assert_eq!(
        t.log.liveness().unwrap(),
        Liveness::Stale {
            last_epoch: NOW - 7_200
        }
    );
}

#[test]
fn test_trait_object_matches_inherent_behavior() {
    fn exercise<L: EventLogger>(log: &L) -> Result<usize, L::Error> {
        log.save_log("pump-check", "ok")?;
        log.save_log("pump-check", "failed")?;
        assert!(log.alive()?);
        Ok(log.get_all_logs()?.len())
    }

    let sqlite = EventLog::open_in_memory().unwrap();
    assert_eq!(exercise(&sqlite).unwrap(), 2);

    let memory = sumplog::InMemoryEventLog::new();
    assert_eq!(exercise(&memory).unwrap(), 2);
}

#[test]
fn test_concurrent_writers_get_distinct_ids() {
    let t = TestLog::new(NOW);
    let log = Arc::new(EventLog::open(t.db_path()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                (0..20)
                    .map(|i| log.save_log("pump-check", &format!("{worker}-{i}")).unwrap())
                    .collect::<Vec<i64>>()
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 160);
    assert_eq!(log.count().unwrap(), 160);
}

#[test]
fn test_reads_existing_data_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("legacy.db");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS logs(
                id INTEGER PRIMARY KEY ASC,
                epoch INTEGER,
                action TEXT,
                result TEXT
            );
            INSERT INTO logs(epoch, action, result) VALUES (100, 'pump-check', 'ok');
            INSERT INTO logs(epoch, action, result) VALUES (200, 'pump-check', 'failed');",
        )
        .unwrap();
    }

    let log = EventLog::open(&path).unwrap();
    let all = log.get_all_logs().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!((all[1].id, all[1].epoch), (2, 200));
    assert_eq!(log.save_log("pump-check", "ok").unwrap(), 3);
}

#[test]
fn test_liveness_and_range_surface_read_errors() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("foreign.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE logs(id INTEGER PRIMARY KEY, other TEXT)")
        .unwrap();

    let log = EventLog::open(&path).unwrap();
    assert!(matches!(log.alive(), Err(SumplogError::Read(_))));
    assert!(matches!(log.liveness(), Err(SumplogError::Read(_))));
    assert!(matches!(
        log.get_logs_between(at(0), at(NOW)),
        Err(SumplogError::Read(_))
    ));

    assert!(matches!(
        EventLogger::alive(&log),
        Err(SumplogError::Read(_))
    ));
}

#[test]
fn test_unopenable_location_is_init_error() {
    let dir = tempfile::TempDir::new().unwrap();
    // A directory cannot be opened as a database file.
    let err = EventLog::open(dir.path()).unwrap_err();
    assert!(matches!(err, SumplogError::Init { .. }), "{err}");
}
