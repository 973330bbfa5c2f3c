//! Sleep log storage.

use crate::db::{now_timestamp, parse_timestamp};
use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::{NewSleepEntry, SleepEntry, SleepHours, SleepQuality};
use rusqlite::{params, Connection};
use tracing::debug;

const TABLE: &str = "sleep";

/// Appends a sleep log and returns its id.
pub fn insert_sleep(conn: &Connection, entry: &NewSleepEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sleep (hours, quality, recorded_at) VALUES (?1, ?2, ?3)",
        params![entry.hours.get(), entry.quality.as_str(), now_timestamp()],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Sleep log inserted with id {}", id);
    Ok(id)
}

/// Lists every sleep log, oldest first.
pub fn list_sleep(conn: &Connection) -> AppResult<Vec<SleepEntry>> {
    let mut stmt = conn
        .prepare("SELECT id, hours, quality, recorded_at FROM sleep ORDER BY id ASC")
        .map_err(DatabaseError::Sqlite)?;

    let rows: Vec<(i64, f64, String, String)> = stmt
        .query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
        })
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    rows.into_iter()
        .map(|(id, hours, quality, recorded_at)| -> AppResult<SleepEntry> {
            let corrupt = |e: crate::errors::ValidationError| {
                DatabaseError::CorruptRow(TABLE.to_string(), e.to_string())
            };
            Ok(SleepEntry {
                id,
                hours: SleepHours::new(hours).map_err(corrupt)?,
                quality: quality.parse::<SleepQuality>().map_err(corrupt)?,
                recorded_at: parse_timestamp(TABLE, &recorded_at)?,
            })
        })
        .collect()
}

/// Number of stored sleep logs.
pub fn count_sleep(conn: &Connection) -> AppResult<usize> {
    crate::db::count_rows(conn, TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        crate::db::schema::create_tables(&conn).unwrap();
        conn
    }

    fn log(hours: f64, quality: SleepQuality) -> NewSleepEntry {
        NewSleepEntry {
            hours: SleepHours::new(hours).unwrap(),
            quality,
        }
    }

    #[test]
    fn test_insert_and_list() {
        let conn = setup_test_db();
        insert_sleep(&conn, &log(7.5, SleepQuality::Good)).unwrap();
        insert_sleep(&conn, &log(4.0, SleepQuality::Poor)).unwrap();

        let entries = list_sleep(&conn).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hours.get(), 7.5);
        assert_eq!(entries[0].quality, SleepQuality::Good);
        assert_eq!(entries[1].hours.get(), 4.0);
        assert_eq!(entries[1].quality, SleepQuality::Poor);
        assert!(entries[1].id > entries[0].id);
        assert_eq!(count_sleep(&conn).unwrap(), 2);
    }

    #[test]
    fn test_boundary_hours_are_stored() {
        let conn = setup_test_db();
        insert_sleep(&conn, &log(0.0, SleepQuality::Poor)).unwrap();
        insert_sleep(&conn, &log(24.0, SleepQuality::Great)).unwrap();

        let hours: Vec<f64> = list_sleep(&conn)
            .unwrap()
            .iter()
            .map(|e| e.hours.get())
            .collect();
        assert_eq!(hours, vec![0.0, 24.0]);
    }
}
