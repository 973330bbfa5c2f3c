//! Configuration management for the mindcaps application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `MINDCAPS_DIR`: Path to the data directory (defaults to ~/.mindcaps)
//! - `MINDCAPS_MOODS`: Comma-separated mood labels (defaults to Happy,Sad,Stressed,Calm,Excited,Angry)
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DATABASE_FILE_NAME, DEFAULT_DATA_SUBDIR, ENV_VAR_HOME, ENV_VAR_MINDCAPS_DIR,
    ENV_VAR_MINDCAPS_MOODS, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::journal_core::MoodSet;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the mindcaps application.
///
/// # Examples
///
/// ```
/// use mindcaps::Config;
/// use mindcaps::journal_core::MoodSet;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     moods: MoodSet::default(),
/// };
/// assert!(config.validate().is_ok());
/// assert_eq!(config.database_path(), PathBuf::from("/path/to/data/mindcaps.db"));
/// ```
pub struct Config {
    /// Directory holding the store and its lock file.
    pub data_dir: PathBuf,

    /// The closed set of mood labels accepted by `log`.
    pub moods: MoodSet,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .field("moods", &self.moods.labels())
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// `dir_override` (from the `--dir` flag) takes precedence over
    /// `MINDCAPS_DIR`. The directory path is expanded with `shellexpand`, so
    /// `~` and `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `MINDCAPS_MOODS` is empty, has blank labels or case-insensitive duplicates
    pub fn load(dir_override: Option<&Path>) -> AppResult<Self> {
        let data_dir = match dir_override {
            Some(dir) => expand_path(&dir.to_string_lossy())?,
            None => {
                let raw = env::var(ENV_VAR_MINDCAPS_DIR).unwrap_or_else(|_| {
                    let home = env::var(ENV_VAR_HOME).unwrap_or_default();
                    format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
                });
                expand_path(&raw)?
            }
        };

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let moods = match env::var(ENV_VAR_MINDCAPS_MOODS) {
            Ok(raw) => parse_mood_set(&raw)?,
            Err(_) => MoodSet::default(),
        };

        let config = Config { data_dir, moods };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory is empty or relative.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }

    /// Location of the SQLite store.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Creates the data directory if needed, owner-only on unix.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the directory cannot be created.
    pub fn ensure_data_dir(&self) -> AppResult<()> {
        if self.data_dir.exists() {
            return Ok(());
        }

        fs::create_dir_all(&self.data_dir).map_err(|e| {
            AppError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions =
                fs::Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(&self.data_dir, permissions)?;
            debug!("Set 0o700 permissions on data directory");
        }

        Ok(())
    }
}

fn expand_path(raw: &str) -> AppResult<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

fn parse_mood_set(raw: &str) -> AppResult<MoodSet> {
    MoodSet::new(raw.split(',')).ok_or_else(|| {
        AppError::Config(format!(
            "{} must be a comma-separated list of distinct, non-empty labels",
            ENV_VAR_MINDCAPS_MOODS
        ))
    })
}
