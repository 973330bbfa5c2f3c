//! Mood entry storage.
//!
//! Rows are appended once and read back in id order. There is no update or
//! delete path.

use crate::db::{now_timestamp, parse_timestamp};
use crate::errors::{AppResult, DatabaseError};
use crate::journal_core::{Intensity, Mood, MoodEntry, NewMoodEntry};
use crate::sentiment::Sentiment;
use rusqlite::{params, Connection};
use tracing::debug;

const TABLE: &str = "moods";

/// Appends a mood entry and returns its id.
///
/// The timestamp is assigned here, at insert time. The statement runs in
/// autocommit mode, so the row is durable once this returns.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_mood(conn: &Connection, entry: &NewMoodEntry) -> AppResult<i64> {
    debug!(
        "Inserting {} mood entry (intensity {}, {} chars)",
        entry.mood(),
        entry.intensity(),
        entry.note().len()
    );

    conn.execute(
        r#"
        INSERT INTO moods (mood, intensity, note, sentiment, recorded_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        "#,
        params![
            entry.mood().as_str(),
            entry.intensity().get() as i64,
            entry.note(),
            entry.sentiment().score(),
            now_timestamp(),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    let id = conn.last_insert_rowid();
    debug!("Mood entry inserted with id {}", id);
    Ok(id)
}

/// Columns of one mood row, before validation.
type MoodRow = (i64, String, i64, String, i64, String);

fn row_to_mood((id, mood, intensity, note, sentiment, recorded_at): MoodRow) -> AppResult<MoodEntry> {
    let intensity = Intensity::new(intensity)
        .map_err(|e| DatabaseError::CorruptRow(TABLE.to_string(), e.to_string()))?;

    Ok(MoodEntry {
        id,
        mood: Mood::from_stored(mood),
        intensity,
        note,
        sentiment: Sentiment::from_score(sentiment),
        recorded_at: parse_timestamp(TABLE, &recorded_at)?,
    })
}

/// Lists every mood entry, oldest (lowest id) first.
///
/// # Errors
///
/// Returns an error if the query fails, or `DatabaseError::CorruptRow` if a
/// stored row cannot be read back as an entry.
pub fn list_moods(conn: &Connection) -> AppResult<Vec<MoodEntry>> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT id, mood, intensity, note, sentiment, recorded_at
            FROM moods
            ORDER BY id ASC
            "#,
        )
        .map_err(DatabaseError::Sqlite)?;

    let rows: Vec<MoodRow> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    let entries = rows
        .into_iter()
        .map(row_to_mood)
        .collect::<AppResult<Vec<_>>>()?;

    debug!("Loaded {} mood entries", entries.len());
    Ok(entries)
}

/// Number of stored mood entries.
pub fn count_moods(conn: &Connection) -> AppResult<usize> {
    crate::db::count_rows(conn, TABLE)
}
