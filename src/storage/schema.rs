//! Table layout for the event log.
//!
//! The `logs` table layout is shared with existing data files and must not
//! change: column names, order and declared types are checked by `doctor`.

use rusqlite::Connection;

/// Name of the backing table.
pub const LOGS_TABLE: &str = "logs";

/// Idempotent DDL for the backing table.
pub const LOGS_TABLE_SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS logs(
    id INTEGER PRIMARY KEY ASC,
    epoch INTEGER,
    action TEXT,
    result TEXT
)
";

/// Expected `(name, declared type)` pairs, in column order.
pub const LOGS_COLUMNS: [(&str, &str); 4] = [
    ("id", "INTEGER"),
    ("epoch", "INTEGER"),
    ("action", "TEXT"),
    ("result", "TEXT"),
];

/// One column as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub primary_key: bool,
}

/// Create the `logs` table if it does not exist.
///
/// # Errors
///
/// Returns the SQLite error if the statement fails.
pub fn apply_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(LOGS_TABLE_SCHEMA)
}

/// Read the column layout of `table`, in declaration order.
///
/// A missing table yields an empty list.
///
/// # Errors
///
/// Returns the SQLite error if the pragma cannot be run.
pub fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let rows = stmt.query_map([], |row| {
        Ok(ColumnInfo {
            name: row.get(1)?,
            decl_type: row.get(2)?,
            primary_key: row.get::<_, i64>(5)? > 0,
        })
    })?;
    rows.collect()
}

/// Describe every way the `logs` table deviates from the expected layout.
///
/// An empty result means the layout matches.
///
/// # Errors
///
/// Returns the SQLite error if the layout cannot be read.
pub fn layout_problems(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    let columns = table_columns(conn, LOGS_TABLE)?;
    if columns.is_empty() {
        return Ok(vec![format!("missing table '{LOGS_TABLE}'")]);
    }

    let mut problems = Vec::new();
    if columns.len() != LOGS_COLUMNS.len() {
        problems.push(format!(
            "expected {} columns, found {}",
            LOGS_COLUMNS.len(),
            columns.len()
        ));
    }
    for (idx, (name, decl_type)) in LOGS_COLUMNS.iter().enumerate() {
        match columns.get(idx) {
            Some(col) if col.name == *name && col.decl_type.eq_ignore_ascii_case(decl_type) => {}
            Some(col) => problems.push(format!(
                "column {idx}: expected {name} {decl_type}, found {} {}",
                col.name, col.decl_type
            )),
            None => problems.push(format!("column {idx}: missing {name} {decl_type}")),
        }
    }
    if !columns.first().is_some_and(|col| col.primary_key) {
        problems.push("column 'id' is not the primary key".to_string());
    }
    Ok(problems)
}
