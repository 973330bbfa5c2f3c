//! Gratitude and sleep entry types.

use crate::constants::{MAX_SLEEP_HOURS, MIN_SLEEP_HOURS};
use crate::errors::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated gratitude note that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGratitude(String);

impl NewGratitude {
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyGratitude);
        }
        Ok(NewGratitude(text.to_string()))
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// A stored gratitude note.
#[derive(Debug, Clone, PartialEq)]
pub struct GratitudeEntry {
    pub id: i64,
    pub text: String,
    pub recorded_at: DateTime<Utc>,
}

/// Hours slept, between 0 and 24 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SleepHours(f64);

impl SleepHours {
    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if hours.is_finite() && (MIN_SLEEP_HOURS..=MAX_SLEEP_HOURS).contains(&hours) {
            Ok(SleepHours(hours))
        } else {
            Err(ValidationError::SleepHoursOutOfRange(hours))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for SleepHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Self-reported sleep quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SleepQuality {
    Great,
    Good,
    Fair,
    Poor,
}

impl SleepQuality {
    pub const ALL: [SleepQuality; 4] = [
        SleepQuality::Great,
        SleepQuality::Good,
        SleepQuality::Fair,
        SleepQuality::Poor,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SleepQuality::Great => "Great",
            SleepQuality::Good => "Good",
            SleepQuality::Fair => "Fair",
            SleepQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SleepQuality {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SleepQuality::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::UnknownSleepQuality(wanted.to_string()))
    }
}

/// A validated sleep log that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewSleepEntry {
    pub hours: SleepHours,
    pub quality: SleepQuality,
}

/// A stored sleep log.
#[derive(Debug, Clone, PartialEq)]
pub struct SleepEntry {
    pub id: i64,
    pub hours: SleepHours,
    pub quality: SleepQuality,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gratitude_trims_and_rejects_blank() {
        assert_eq!(NewGratitude::new("  sunshine ").unwrap().text(), "sunshine");
        assert_eq!(NewGratitude::new("   "), Err(ValidationError::EmptyGratitude));
    }

    #[test]
    fn test_sleep_hours_range() {
        assert_eq!(SleepHours::new(0.0).unwrap().get(), 0.0);
        assert_eq!(SleepHours::new(7.5).unwrap().get(), 7.5);
        assert_eq!(SleepHours::new(24.0).unwrap().get(), 24.0);
        assert!(SleepHours::new(-0.5).is_err());
        assert!(SleepHours::new(24.5).is_err());
        assert!(SleepHours::new(f64::NAN).is_err());
        assert!(SleepHours::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sleep_quality_parsing() {
        assert_eq!("good".parse::<SleepQuality>().unwrap(), SleepQuality::Good);
        assert_eq!(" POOR ".parse::<SleepQuality>().unwrap(), SleepQuality::Poor);
        assert_eq!(
            "meh".parse::<SleepQuality>(),
            Err(ValidationError::UnknownSleepQuality("meh".to_string()))
        );
        for quality in SleepQuality::ALL {
            assert_eq!(quality.as_str().parse::<SleepQuality>().unwrap(), quality);
        }
    }
}
