//! Keyword-based sentiment classification.
//!
//! A note is lower-cased and checked against two fixed marker lists. Each
//! marker counts once if it appears anywhere in the note, including inside a
//! longer word ("unhappy" contains "happy"). Whichever list has more hits
//! decides the label; a tie is neutral.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markers that push a note towards a positive label.
pub const POSITIVE_MARKERS: &[&str] = &[
    "happy", "great", "calm", "excited", "love", "peace", "joy", "good", "proud",
];

/// Markers that push a note towards a negative label.
pub const NEGATIVE_MARKERS: &[&str] = &[
    "sad", "angry", "stressed", "tired", "hate", "anxious", "worried", "bad", "awful",
];

/// Coarse three-way polarity of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Signed score stored alongside an entry: +1, 0 or -1.
    pub fn score(self) -> i64 {
        match self {
            Sentiment::Positive => 1,
            Sentiment::Neutral => 0,
            Sentiment::Negative => -1,
        }
    }

    /// Maps a stored score back to its label. Any positive score is
    /// positive and any negative score is negative.
    pub fn from_score(score: i64) -> Self {
        match score.signum() {
            1 => Sentiment::Positive,
            -1 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    /// Lower-case label used in output and exports.
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    /// Number of distinct positive markers found.
    pub positive_hits: usize,
    /// Number of distinct negative markers found.
    pub negative_hits: usize,
}

impl Classification {
    /// The signed score of the derived sentiment.
    pub fn score(&self) -> i64 {
        self.sentiment.score()
    }
}

fn count_markers(haystack: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|marker| haystack.contains(*marker)).count()
}

/// Classifies a note by majority of marker hits.
///
/// Never fails: a note without any markers is neutral.
///
/// # Examples
///
/// ```
/// use mindcaps::sentiment::{classify, Sentiment};
///
/// let result = classify("I feel happy and calm");
/// assert_eq!(result.sentiment, Sentiment::Positive);
/// assert_eq!(result.score(), 1);
///
/// assert_eq!(classify("Today was ok").sentiment, Sentiment::Neutral);
/// ```
pub fn classify(note: &str) -> Classification {
    let lowered = note.to_lowercase();
    let positive_hits = count_markers(&lowered, POSITIVE_MARKERS);
    let negative_hits = count_markers(&lowered, NEGATIVE_MARKERS);

    let sentiment = match positive_hits.cmp(&negative_hits) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    };

    Classification {
        sentiment,
        positive_hits,
        negative_hits,
    }
}
