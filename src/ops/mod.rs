//! High-level operations behind each command.
//!
//! These functions orchestrate validation, classification and the store:
//! saving a mood entry with feedback, logging gratitude and sleep, exporting
//! the journal, and computing analytics.

pub mod analytics;
pub mod export;
pub mod feedback;
pub mod journal;
pub mod wellness;

// Re-export commonly used functions
pub use analytics::{distribution, summary, Summary};
pub use export::{default_export_file_name, export_entries, ExportRecord, ExportReport};
pub use feedback::{Advice, Chooser, Feedback, FixedChoice};
pub use journal::{save_mood_entry, MoodInput, SaveOutcome};
pub use wellness::{add_gratitude, log_sleep};
