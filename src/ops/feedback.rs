//! Feedback shown after a mood entry is saved.
//!
//! The affirmation and prompt are picked at random from fixed lists. The pick
//! goes through [`Chooser`] so callers (and tests) decide where the
//! randomness comes from. Advice is not random: it follows a small rule table
//! keyed on the mood's category and the note's sentiment.

use crate::journal_core::{Mood, MoodCategory};
use crate::sentiment::Sentiment;
use rand::Rng;
use std::fmt;

/// Affirmations, one of which accompanies every saved entry.
pub const QUOTES: &[&str] = &[
    "You're doing great!",
    "Take a deep breath.",
    "One step at a time.",
    "You matter.",
    "Progress, not perfection.",
    "Be kind to yourself.",
    "Every moment is a fresh beginning.",
    "You are stronger than you think.",
    "Small steps lead to big changes.",
    "Your feelings are valid.",
];

const HAPPY_PROMPTS: &[&str] = &[
    "What made today feel good?",
    "Who would you like to share this feeling with?",
    "How can you make room for more moments like this?",
];

const SAD_PROMPTS: &[&str] = &[
    "What would you say to a friend feeling this way?",
    "What is one small thing that could comfort you right now?",
    "Is there someone you could reach out to today?",
];

const STRESSED_PROMPTS: &[&str] = &[
    "What is within your control right now?",
    "Which task could wait until tomorrow?",
    "What would help your body relax for five minutes?",
];

const CALM_PROMPTS: &[&str] = &[
    "What helped you find this calm?",
    "How does calm feel in your body?",
    "What would you like to carry from this moment into tomorrow?",
];

const EXCITED_PROMPTS: &[&str] = &[
    "What are you looking forward to most?",
    "How can you channel this energy?",
    "What first step can you take today?",
];

const ANGRY_PROMPTS: &[&str] = &[
    "What boundary was crossed?",
    "What do you need right now to feel respected?",
    "What would you like to happen next?",
];

const CALMING_ADVICE: &str =
    "It sounds like a heavy moment. Try the breathing exercise or step away for a short walk.";
const ENCOURAGEMENT: &str = "Wonderful! Hold on to this energy and notice what brought it.";
const ACKNOWLEDGMENT: &str = "Thanks for checking in with yourself today.";

/// Source of random indices for feedback selection.
pub trait Chooser {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Always picks the same position, wrapped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice(pub usize);

impl Chooser for FixedChoice {
    fn pick(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Which advice rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// Distressed mood with a negative note.
    Calming,
    /// Upbeat mood with a positive note.
    Encouragement,
    /// Every other combination.
    Acknowledgment,
}

impl Advice {
    /// Applies the rule table.
    pub fn for_entry(category: MoodCategory, sentiment: Sentiment) -> Self {
        match (category, sentiment) {
            (MoodCategory::Distressed, Sentiment::Negative) => Advice::Calming,
            (MoodCategory::Upbeat, Sentiment::Positive) => Advice::Encouragement,
            _ => Advice::Acknowledgment,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Advice::Calming => CALMING_ADVICE,
            Advice::Encouragement => ENCOURAGEMENT,
            Advice::Acknowledgment => ACKNOWLEDGMENT,
        }
    }
}

/// Reflective prompts for a mood label. Custom labels have none.
pub fn prompts_for(mood: &Mood) -> &'static [&'static str] {
    match mood.as_str().to_ascii_lowercase().as_str() {
        "happy" => HAPPY_PROMPTS,
        "sad" => SAD_PROMPTS,
        "stressed" => STRESSED_PROMPTS,
        "calm" => CALM_PROMPTS,
        "excited" => EXCITED_PROMPTS,
        "angry" => ANGRY_PROMPTS,
        _ => &[],
    }
}

/// Feedback text for a saved entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub sentiment: Sentiment,
    pub quote: &'static str,
    pub prompt: Option<&'static str>,
    pub advice: Advice,
}

impl Feedback {
    /// Builds feedback for an entry, drawing the quote first and then the
    /// prompt from `chooser`.
    pub fn compose(mood: &Mood, sentiment: Sentiment, chooser: &mut dyn Chooser) -> Self {
        let quote = QUOTES[chooser.pick(QUOTES.len())];
        let prompts = prompts_for(mood);
        let prompt = if prompts.is_empty() {
            None
        } else {
            Some(prompts[chooser.pick(prompts.len())])
        };

        Feedback {
            sentiment,
            quote,
            prompt,
            advice: Advice::for_entry(mood.category(), sentiment),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Journal saved! Sentiment: {}", self.sentiment)?;
        writeln!(f, "\"{}\"", self.quote)?;
        if let Some(prompt) = self.prompt {
            writeln!(f, "Reflect: {}", prompt)?;
        }
        write!(f, "{}", self.advice.text())
    }
}
