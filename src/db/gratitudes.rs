//! Gratitude note storage.

use crate::db::{now_timestamp, parse_timestamp};
use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::{GratitudeEntry, NewGratitude};
use rusqlite::{params, Connection};
use tracing::debug;

const TABLE: &str = "gratitudes";

/// Appends a gratitude note and returns its id.
pub fn insert_gratitude(conn: &Connection, gratitude: &NewGratitude) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO gratitudes (text, recorded_at) VALUES (?1, ?2)",
        params![gratitude.text(), now_timestamp()],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Gratitude inserted with id {}", id);
    Ok(id)
}

/// Lists every gratitude note, oldest first.
pub fn list_gratitudes(conn: &Connection) -> AppResult<Vec<GratitudeEntry>> {
    let mut stmt = conn
        .prepare("SELECT id, text, recorded_at FROM gratitudes ORDER BY id ASC")
        .map_err(DatabaseError::Sqlite)?;

    let rows: Vec<(i64, String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    rows.into_iter()
        .map(|(id, text, recorded_at)| -> AppResult<GratitudeEntry> {
            Ok(GratitudeEntry {
                id,
                text,
                recorded_at: parse_timestamp(TABLE, &recorded_at)?,
            })
        })
        .collect()
}

/// Number of stored gratitude notes.
pub fn count_gratitudes(conn: &Connection) -> AppResult<usize> {
    crate::db::count_rows(conn, TABLE)
}
