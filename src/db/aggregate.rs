//! Grouped counts for analytics.

use crate::errors::{AppResult, DatabaseError};
use crate::sentiment::Sentiment;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A field to group entries by. Each field belongs to exactly one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    /// Mood label of mood entries.
    Mood,
    /// Sentiment label of mood entries.
    Sentiment,
    /// Intensity of mood entries.
    Intensity,
    /// Quality of sleep logs.
    SleepQuality,
}

impl GroupBy {
    fn table_and_column(self) -> (&'static str, &'static str) {
        match self {
            GroupBy::Mood => ("moods", "mood"),
            GroupBy::Sentiment => ("moods", "sentiment"),
            GroupBy::Intensity => ("moods", "intensity"),
            GroupBy::SleepQuality => ("sleep", "quality"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupBy::Mood => "mood",
            GroupBy::Sentiment => "sentiment",
            GroupBy::Intensity => "intensity",
            GroupBy::SleepQuality => "quality",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mood" => Ok(GroupBy::Mood),
            "sentiment" => Ok(GroupBy::Sentiment),
            "intensity" => Ok(GroupBy::Intensity),
            "quality" | "sleep" => Ok(GroupBy::SleepQuality),
            other => Err(format!(
                "unknown field '{}', expected mood, sentiment, intensity or quality",
                other
            )),
        }
    }
}

/// Counts entries per distinct value of `group_by`.
///
/// Every value present in the store appears with its exact count, so the
/// counts always sum to the number of entries of that kind. Sentiment keys
/// are rendered as labels rather than stored scores.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn aggregate_counts(conn: &Connection, group_by: GroupBy) -> AppResult<BTreeMap<String, usize>> {
    let (table, column) = group_by.table_and_column();
    debug!("Aggregating {} by {}", table, column);

    // Both names come from the fixed table above, never from user input
    let sql = format!(
        "SELECT CAST({column} AS TEXT), COUNT(*) FROM {table} GROUP BY {column}",
        column = column,
        table = table
    );

    let mut stmt = conn.prepare(&sql).map_err(DatabaseError::Sqlite)?;
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(DatabaseError::Sqlite)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(DatabaseError::Sqlite)?;

    let mut counts = BTreeMap::new();
    for (value, count) in rows {
        let key = match group_by {
            GroupBy::Sentiment => {
                let score: i64 = value.parse().map_err(|_| {
                    DatabaseError::CorruptRow(table.to_string(), format!("sentiment '{}'", value))
                })?;
                Sentiment::from_score(score).label().to_string()
            }
            _ => value,
        };
        *counts.entry(key).or_insert(0) += count as usize;
    }

    Ok(counts)
}
