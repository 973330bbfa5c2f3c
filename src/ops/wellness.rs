//! Gratitude and sleep logging.

use crate::db::gratitudes::insert_gratitude;
use crate::db::sleep::insert_sleep;
use crate::db::Database;
use crate::errors::AppResult;
use crate::journal_core::{NewGratitude, NewSleepEntry, SleepHours, SleepQuality};
use tracing::info;

/// Stores a gratitude note and returns its id.
///
/// # Errors
///
/// Returns `AppError::Validation` for blank text; nothing is stored then.
pub fn add_gratitude(db: &Database, text: &str) -> AppResult<i64> {
    let gratitude = NewGratitude::new(text)?;
    let conn = db.get_conn()?;
    let id = insert_gratitude(&conn, &gratitude)?;
    info!("Gratitude added with id {}", id);
    Ok(id)
}

/// Stores a sleep log and returns its id.
///
/// # Errors
///
/// Returns `AppError::Validation` if `hours` is outside 0..=24.
pub fn log_sleep(db: &Database, hours: f64, quality: SleepQuality) -> AppResult<i64> {
    let entry = NewSleepEntry {
        hours: SleepHours::new(hours)?,
        quality,
    };
    let conn = db.get_conn()?;
    let id = insert_sleep(&conn, &entry)?;
    info!("Sleep logged: {}h ({})", entry.hours, entry.quality);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::gratitudes::{count_gratitudes, list_gratitudes};
    use crate::db::sleep::{count_sleep, list_sleep};
    use crate::errors::{AppError, ValidationError};

    fn setup() -> Database {
        let db = Database::open_in_memory().unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_add_gratitude_trims_text() {
        let db = setup();
        add_gratitude(&db, "  a warm dinner  ").unwrap();
        let entries = list_gratitudes(&db.get_conn().unwrap()).unwrap();
        assert_eq!(entries[0].text, "a warm dinner");
    }

    #[test]
    fn test_blank_gratitude_is_rejected() {
        let db = setup();
        let err = add_gratitude(&db, "   ").unwrap_err();
        assert!(matches!(err, AppError::Validation(ValidationError::EmptyGratitude)));
        assert_eq!(count_gratitudes(&db.get_conn().unwrap()).unwrap(), 0);
    }

    #[test]
    fn test_log_sleep() {
        let db = setup();
        let id = log_sleep(&db, 8.0, SleepQuality::Great).unwrap();
        let entries = list_sleep(&db.get_conn().unwrap()).unwrap();
        assert_eq!(entries[0].id, id);
        assert_eq!(entries[0].hours.get(), 8.0);
        assert_eq!(entries[0].quality, SleepQuality::Great);
    }

    #[test]
    fn test_out_of_range_sleep_is_rejected() {
        let db = setup();
        for hours in [-1.0, 24.5, f64::NAN] {
            let err = log_sleep(&db, hours, SleepQuality::Fair).unwrap_err();
            assert!(err.is_validation());
        }
        assert_eq!(count_sleep(&db.get_conn().unwrap()).unwrap(), 0);
    }
}
