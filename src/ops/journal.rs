//! Saving a mood entry.

use crate::db::moods::insert_mood;
use crate::db::Database;
use crate::errors::{AppResult, ValidationError};
use crate::journal_core::{Intensity, MoodSet, NewMoodEntry};
use crate::ops::feedback::{Chooser, Feedback};
use crate::sentiment::classify;
use tracing::{debug, info};

/// Raw input for one save action, as collected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodInput {
    pub mood: Option<String>,
    pub intensity: i64,
    pub note: String,
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub id: i64,
    pub feedback: Feedback,
}

/// Validates, classifies and stores one mood entry.
///
/// # Flow
///
/// 1. Reject a blank note, a missing or unknown mood, or an out-of-range intensity
/// 2. Classify the note
/// 3. Append the entry to the store
/// 4. Compose feedback for the user
///
/// Validation happens before the store is touched, so a rejected entry
/// leaves no trace.
///
/// # Errors
///
/// Returns `AppError::Validation` for rejected input and
/// `AppError::Database` if the insert fails.
pub fn save_mood_entry(
    db: &Database,
    moods: &MoodSet,
    input: &MoodInput,
    chooser: &mut dyn Chooser,
) -> AppResult<SaveOutcome> {
    if input.note.trim().is_empty() {
        return Err(ValidationError::EmptyNote.into());
    }
    let mood = match input.mood.as_deref() {
        Some(label) => moods.resolve(label)?,
        None => return Err(ValidationError::MoodUnset.into()),
    };
    let intensity = Intensity::new(input.intensity)?;

    let classification = classify(&input.note);
    debug!(
        "Classified note: {} positive, {} negative -> {}",
        classification.positive_hits, classification.negative_hits, classification.sentiment
    );

    let entry = NewMoodEntry::new(mood, intensity, &input.note, classification.sentiment)?;

    let conn = db.get_conn()?;
    let id = insert_mood(&conn, &entry)?;
    info!("Saved mood entry {} ({})", id, entry.mood());

    let feedback = Feedback::compose(entry.mood(), entry.sentiment(), chooser);
    Ok(SaveOutcome { id, feedback })
}
