//! Aggregates and trends over stored entries.

use crate::constants::{RECENT_INTENSITY_WINDOW, SLEEP_TREND_WINDOW};
use crate::db::aggregate::{aggregate_counts, GroupBy};
use crate::db::gratitudes::count_gratitudes;
use crate::db::moods::list_moods;
use crate::db::sleep::list_sleep;
use crate::db::Database;
use crate::errors::AppResult;
use crate::journal_core::{current_streak, MoodEntry, SleepEntry};
use chrono::{Local, NaiveDate, TimeZone};
use std::collections::BTreeMap;
use tracing::debug;

/// Counts of each distinct value of the grouped field.
pub fn distribution(db: &Database, group_by: GroupBy) -> AppResult<BTreeMap<String, usize>> {
    let conn = db.get_conn()?;
    let counts = aggregate_counts(&conn, group_by)?;
    debug!("{} distinct values for {}", counts.len(), group_by);
    Ok(counts)
}

/// Dashboard figures for the whole journal.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub streak: u32,
    /// Latest mood entries as (day, intensity), oldest first.
    pub recent_intensity: Vec<(NaiveDate, u8)>,
    /// Latest sleep logs as (day, hours), oldest first.
    pub sleep_trend: Vec<(NaiveDate, f64)>,
    pub average_sleep_hours: Option<f64>,
    pub total_moods: usize,
    pub total_gratitudes: usize,
    pub total_sleep: usize,
}

/// Computes the summary with entry dates taken in local time.
pub fn summary(db: &Database, today: NaiveDate) -> AppResult<Summary> {
    let conn = db.get_conn()?;
    let moods = list_moods(&conn)?;
    let sleep = list_sleep(&conn)?;
    let total_gratitudes = count_gratitudes(&conn)?;
    Ok(summarize(&moods, &sleep, total_gratitudes, today, &Local))
}

/// Builds a summary from already-loaded entries, bucketing days in `tz`.
pub fn summarize<Tz: TimeZone>(
    moods: &[MoodEntry],
    sleep: &[SleepEntry],
    total_gratitudes: usize,
    today: NaiveDate,
    tz: &Tz,
) -> Summary {
    let day_of = |at: &chrono::DateTime<chrono::Utc>| at.with_timezone(tz).date_naive();

    let streak = current_streak(moods.iter().map(|m| day_of(&m.recorded_at)), today);

    let recent_intensity = tail(moods, RECENT_INTENSITY_WINDOW)
        .iter()
        .map(|m| (day_of(&m.recorded_at), m.intensity.get()))
        .collect();

    let sleep_trend = tail(sleep, SLEEP_TREND_WINDOW)
        .iter()
        .map(|s| (day_of(&s.recorded_at), s.hours.get()))
        .collect();

    let average_sleep_hours = if sleep.is_empty() {
        None
    } else {
        Some(sleep.iter().map(|s| s.hours.get()).sum::<f64>() / sleep.len() as f64)
    };

    Summary {
        streak,
        recent_intensity,
        sleep_trend,
        average_sleep_hours,
        total_moods: moods.len(),
        total_gratitudes,
        total_sleep: sleep.len(),
    }
}

fn tail<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}
