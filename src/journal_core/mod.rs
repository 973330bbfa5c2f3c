//! Core journal types without I/O operations.
//!
//! This module holds the validated value types that flow between the session
//! controller and the store. Each `New*` type can only be built through a
//! constructor that enforces its presence and range checks, so the store never
//! sees an entry it would have to reject.

pub mod streak;
pub mod wellness;

use crate::constants::{DEFAULT_MOODS, MAX_INTENSITY, MIN_INTENSITY};
use crate::errors::ValidationError;
use crate::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use std::fmt;

pub use streak::current_streak;
pub use wellness::{GratitudeEntry, NewGratitude, NewSleepEntry, SleepEntry, SleepHours, SleepQuality};

/// A mood label taken from a [`MoodSet`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mood(String);

impl Mood {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps a label read back from the store. Stored labels were validated
    /// on the way in, and the configured set may have changed since.
    pub(crate) fn from_stored(label: String) -> Self {
        Mood(label)
    }

    /// Broad grouping used by the advice rules.
    pub fn category(&self) -> MoodCategory {
        MoodCategory::of(&self.0)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Broad grouping of moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCategory {
    /// Sad, stressed, angry and similar.
    Distressed,
    /// Happy, excited and similar.
    Upbeat,
    /// Anything else, including custom labels.
    Steady,
}

impl MoodCategory {
    fn of(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "sad" | "stressed" | "angry" | "anxious" | "tired" => MoodCategory::Distressed,
            "happy" | "excited" | "joyful" | "proud" => MoodCategory::Upbeat,
            _ => MoodCategory::Steady,
        }
    }
}

/// The closed set of mood labels a user may pick from.
///
/// # Examples
///
/// ```
/// use mindcaps::journal_core::MoodSet;
///
/// let moods = MoodSet::default();
/// let mood = moods.resolve("happy").unwrap();
/// assert_eq!(mood.as_str(), "Happy");
/// assert!(moods.resolve("Bored").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSet {
    labels: Vec<String>,
}

impl Default for MoodSet {
    fn default() -> Self {
        MoodSet {
            labels: DEFAULT_MOODS.iter().map(|label| label.to_string()).collect(),
        }
    }
}

impl MoodSet {
    /// Builds a set from labels, trimming each one.
    ///
    /// Returns `None` if the set is empty, a label is blank, or two labels
    /// differ only by case.
    pub fn new<I, S>(labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut collected: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim();
            if label.is_empty() {
                return None;
            }
            if collected.iter().any(|l| l.eq_ignore_ascii_case(label)) {
                return None;
            }
            collected.push(label.to_string());
        }
        if collected.is_empty() {
            return None;
        }
        Some(MoodSet { labels: collected })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Looks up a label case-insensitively and returns its canonical form.
    pub fn resolve(&self, label: &str) -> Result<Mood, ValidationError> {
        let wanted = label.trim();
        if wanted.is_empty() {
            return Err(ValidationError::MoodUnset);
        }
        self.labels
            .iter()
            .find(|l| l.eq_ignore_ascii_case(wanted))
            .map(|l| Mood(l.clone()))
            .ok_or_else(|| ValidationError::UnknownMood {
                label: wanted.to_string(),
                allowed: self.labels.join(", "),
            })
    }
}

/// Mood intensity from 1 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if (MIN_INTENSITY..=MAX_INTENSITY).contains(&value) {
            Ok(Intensity(value as u8))
        } else {
            Err(ValidationError::IntensityOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated mood entry that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMoodEntry {
    mood: Mood,
    intensity: Intensity,
    note: String,
    sentiment: Sentiment,
}

impl NewMoodEntry {
    /// Builds an entry, trimming the note and rejecting it if blank.
    ///
    /// The sentiment is passed in so that it is derived exactly once, from
    /// the note as written, by the caller's classifier.
    pub fn new(
        mood: Mood,
        intensity: Intensity,
        note: &str,
        sentiment: Sentiment,
    ) -> Result<Self, ValidationError> {
        let note = note.trim();
        if note.is_empty() {
            return Err(ValidationError::EmptyNote);
        }
        Ok(NewMoodEntry {
            mood,
            intensity,
            note: note.to_string(),
            sentiment,
        })
    }

    pub fn mood(&self) -> &Mood {
        &self.mood
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }
}

/// A stored mood entry.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    pub intensity: Intensity,
    pub note: String,
    pub sentiment: Sentiment,
    pub recorded_at: DateTime<Utc>,
}
