/*!
# Mindcaps

Mindcaps is a small command-line mood journal. Each entry pairs a mood label
and intensity with a short note. The note is classified as positive, neutral
or negative by counting marker words, and the user gets an affirmation, a
reflective prompt and a piece of advice back.

## Core Features

- Mood entries with keyword sentiment classification and feedback
- Gratitude and sleep logs
- Mood distribution charts, journaling streak and sleep trend
- JSON export of the whole journal
- Breathing exercise and meditation countdown on tokio timers

## Architecture

- `cli`: Command-line interface handling using clap, plus text rendering
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `sentiment`: Marker-word classifier
- `journal_core`: Validated entry types and the streak rule
- `db`: SQLite store (r2d2 pool) and process lock
- `ops`: Save, log, export and analytics operations
- `exercises`: Timer-driven breathing and meditation

## Usage Example

```rust,no_run
use mindcaps::db::Database;
use mindcaps::ops::{save_mood_entry, MoodInput};
use mindcaps::Config;

fn main() -> mindcaps::AppResult<()> {
    let config = Config::load(None)?;
    config.ensure_data_dir()?;

    let db = Database::open(&config.database_path())?;
    db.initialize_schema()?;

    let input = MoodInput {
        mood: Some("Calm".to_string()),
        intensity: 6,
        note: "A quiet, good morning".to_string(),
    };
    let outcome = save_mood_entry(&db, &config.moods, &input, &mut rand::thread_rng())?;
    println!("{}", outcome.feedback);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Database operations and schema management
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// Breathing and meditation timers
pub mod exercises;
/// Core journal types and pure logic
pub mod journal_core;
/// High-level operations behind each command
pub mod ops;
/// Keyword sentiment classification
pub mod sentiment;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
