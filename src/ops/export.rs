//! JSON export of every stored entry.
//!
//! The document is a flat array. Each record carries a `type` discriminator
//! and the fields of its kind, with the sentiment written as its label. The
//! file is written to a temporary sibling and renamed into place, so a failed
//! export never leaves a half-written document behind.

use crate::constants::{EXPORT_DATE_FORMAT, EXPORT_FILE_PREFIX};
use crate::db::gratitudes::list_gratitudes;
use crate::db::moods::list_moods;
use crate::db::sleep::list_sleep;
use crate::db::Database;
use crate::errors::{AppResult, ExportError};
use crate::journal_core::{GratitudeEntry, MoodEntry, SleepEntry, SleepQuality};
use crate::sentiment::Sentiment;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// One record of the export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExportRecord {
    Mood {
        id: i64,
        mood: String,
        intensity: u8,
        note: String,
        sentiment: Sentiment,
        date: DateTime<Utc>,
    },
    Gratitude {
        id: i64,
        text: String,
        date: DateTime<Utc>,
    },
    Sleep {
        id: i64,
        hours: f64,
        quality: SleepQuality,
        date: DateTime<Utc>,
    },
}

impl From<MoodEntry> for ExportRecord {
    fn from(entry: MoodEntry) -> Self {
        ExportRecord::Mood {
            id: entry.id,
            mood: entry.mood.to_string(),
            intensity: entry.intensity.get(),
            note: entry.note,
            sentiment: entry.sentiment,
            date: entry.recorded_at,
        }
    }
}

impl From<GratitudeEntry> for ExportRecord {
    fn from(entry: GratitudeEntry) -> Self {
        ExportRecord::Gratitude {
            id: entry.id,
            text: entry.text,
            date: entry.recorded_at,
        }
    }
}

impl From<SleepEntry> for ExportRecord {
    fn from(entry: SleepEntry) -> Self {
        ExportRecord::Sleep {
            id: entry.id,
            hours: entry.hours.get(),
            quality: entry.quality,
            date: entry.recorded_at,
        }
    }
}

/// Summary of a written export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub moods: usize,
    pub gratitudes: usize,
    pub sleep: usize,
}

impl ExportReport {
    pub fn total(&self) -> usize {
        self.moods + self.gratitudes + self.sleep
    }
}

/// File name suggested to the user, e.g. `mindcaps_backup_2024-01-15.json`.
pub fn default_export_file_name(today: NaiveDate) -> String {
    format!(
        "{}{}.json",
        EXPORT_FILE_PREFIX,
        today.format(EXPORT_DATE_FORMAT)
    )
}

/// Reads every entry into export records: moods, then gratitudes, then
/// sleep, each oldest first.
pub fn collect_records(db: &Database) -> AppResult<Vec<ExportRecord>> {
    let conn = db.get_conn()?;
    let moods = list_moods(&conn)?;
    let gratitudes = list_gratitudes(&conn)?;
    let sleep = list_sleep(&conn)?;

    let mut records = Vec::with_capacity(moods.len() + gratitudes.len() + sleep.len());
    records.extend(moods.into_iter().map(ExportRecord::from));
    records.extend(gratitudes.into_iter().map(ExportRecord::from));
    records.extend(sleep.into_iter().map(ExportRecord::from));
    Ok(records)
}

/// Writes every stored entry to `destination` as one JSON document.
///
/// A `None` destination means the user cancelled the choice: nothing is read
/// or written and `Ok(None)` is returned.
///
/// # Errors
///
/// Returns `AppError::Database` if reading fails and `AppError::Export` if
/// the document cannot be serialized or written.
pub fn export_entries(db: &Database, destination: Option<&Path>) -> AppResult<Option<ExportReport>> {
    let path = match destination {
        Some(path) => path,
        None => {
            info!("Export cancelled, no destination chosen");
            return Ok(None);
        }
    };

    let records = collect_records(db)?;
    let mut report = ExportReport {
        path: path.to_path_buf(),
        moods: 0,
        gratitudes: 0,
        sleep: 0,
    };
    for record in &records {
        match record {
            ExportRecord::Mood { .. } => report.moods += 1,
            ExportRecord::Gratitude { .. } => report.gratitudes += 1,
            ExportRecord::Sleep { .. } => report.sleep += 1,
        }
    }

    let document = serde_json::to_string_pretty(&records).map_err(ExportError::Serialize)?;
    write_atomically(path, document.as_bytes())?;

    info!("Exported {} records to {:?}", report.total(), path);
    Ok(Some(report))
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ExportError> {
    let write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    debug!("Writing export through a temp file in {:?}", parent);

    let mut temp = NamedTempFile::new_in(&parent).map_err(write_error)?;
    temp.write_all(contents).map_err(write_error)?;
    temp.flush().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
