//! Error handling utilities for the mindcaps application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Input that was rejected before anything reached the store.
///
/// Every variant is reported inline to the user and aborts the operation
/// without a partial write.
///
/// # Examples
///
/// ```
/// use mindcaps::errors::ValidationError;
///
/// let error = ValidationError::EmptyNote;
/// assert!(format!("{}", error).contains("note"));
///
/// let error = ValidationError::IntensityOutOfRange(11);
/// assert!(format!("{}", error).contains("11"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The journal note was empty or only whitespace.
    #[error("Please write a note. Journal entries cannot be empty.")]
    EmptyNote,

    /// No mood was selected.
    #[error("Please select a mood first.")]
    MoodUnset,

    /// The mood label is not part of the configured mood set.
    #[error("Unknown mood '{label}'. Choose one of: {allowed}")]
    UnknownMood {
        /// The label that was given
        label: String,
        /// Comma-separated list of accepted labels
        allowed: String,
    },

    /// Intensity outside of 1..=10.
    #[error("Intensity must be between 1 and 10, got {0}")]
    IntensityOutOfRange(i64),

    /// Gratitude text was empty or only whitespace.
    #[error("Gratitude text cannot be empty.")]
    EmptyGratitude,

    /// Sleep hours outside of 0..=24 (or not a number).
    #[error("Sleep hours must be between 0 and 24, got {0}")]
    SleepHoursOutOfRange(f64),

    /// Sleep quality label not recognised.
    #[error("Unknown sleep quality '{0}'. Choose one of: Great, Good, Fair, Poor")]
    UnknownSleepQuality(String),
}

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use mindcaps::errors::DatabaseError;
///
/// let error = DatabaseError::CorruptRow("moods".to_string(), "bad timestamp".to_string());
/// assert!(format!("{}", error).contains("moods"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}\n\nIf you're seeing 'file is not a database', the data file may be corrupted or not a mindcaps store.")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored row could not be mapped back into an entry.
    #[error("Stored row in '{0}' could not be read: {1}")]
    CorruptRow(String, String),
}

/// Errors raised while writing an export document.
///
/// A cancelled destination choice is not an error; only failures to produce
/// or write the document end up here.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The entries could not be serialized to JSON.
    #[error("Failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The destination could not be written.
    #[error("Failed to write export to {path}: {source}. Please check that the directory exists and is writable.")]
    Write {
        /// Destination chosen by the user
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents errors that can occur when locking the data store.
///
/// # Examples
///
/// ```
/// use mindcaps::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/data/mindcaps.db.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another mindcaps process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// The store is held by another process.
    #[error("The journal store is in use by another mindcaps process ({path}). Please wait for it to finish and try again.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Acquiring the lock failed for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check that the data directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Represents all possible errors that can occur in the mindcaps application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories.
///
/// # Examples
///
/// ```
/// use mindcaps::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected user input.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Errors related to database operations.
    #[error("Storage error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors while exporting entries.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Errors related to the store lock.
    #[error("Lock error: {0}")]
    Lock(#[from] LockError),

    /// Errors from the background timer task.
    #[error("Timer error: {0}")]
    Timer(String),
}

impl AppError {
    /// Returns `true` when the error is a user input problem rather than a
    /// system failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_))
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        AppError::Database(DatabaseError::Sqlite(err))
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
