//! Consecutive-day journaling streaks.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Counts consecutive days with at least one entry, ending today.
///
/// A streak that last continued yesterday is still alive, so a user who has
/// not written yet today keeps their count. Several entries on the same day
/// count once.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mindcaps::journal_core::current_streak;
///
/// let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
/// let dates = [
///     NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
/// ];
/// assert_eq!(current_streak(dates, today), 2);
/// ```
pub fn current_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = dates.into_iter().filter(|d| *d <= today).collect();

    let yesterday = today - Duration::days(1);
    let mut cursor = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}
