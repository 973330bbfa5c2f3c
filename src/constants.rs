//! Constants used throughout the application.
//!
//! This module contains all constants used in the mindcaps application, organized
//! into logical groups.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "mindcaps";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A small mood journal with gratitude, sleep and breathing tools";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration Keys & Environment Variables
/// Environment variable for the data directory.
pub const ENV_VAR_MINDCAPS_DIR: &str = "MINDCAPS_DIR";
/// Environment variable for a custom comma-separated mood set.
pub const ENV_VAR_MINDCAPS_MOODS: &str = "MINDCAPS_MOODS";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default data sub-directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".mindcaps";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// Storage
/// File name of the SQLite store inside the data directory.
pub const DATABASE_FILE_NAME: &str = "mindcaps.db";
/// File name of the advisory lock guarding the store.
pub const LOCK_FILE_NAME: &str = "mindcaps.db.lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;

// Entry Limits
/// Default mood labels, in display order.
pub const DEFAULT_MOODS: &[&str] = &["Happy", "Sad", "Stressed", "Calm", "Excited", "Angry"];
/// Lowest accepted intensity.
pub const MIN_INTENSITY: i64 = 1;
/// Highest accepted intensity.
pub const MAX_INTENSITY: i64 = 10;
/// Intensity used when none is given.
pub const DEFAULT_INTENSITY: i64 = 5;
/// Lowest accepted number of sleep hours.
pub const MIN_SLEEP_HOURS: f64 = 0.0;
/// Highest accepted number of sleep hours.
pub const MAX_SLEEP_HOURS: f64 = 24.0;

// Analytics
/// Number of mood entries shown in the intensity history.
pub const RECENT_INTENSITY_WINDOW: usize = 10;
/// Number of sleep entries shown in the sleep trend.
pub const SLEEP_TREND_WINDOW: usize = 7;
/// Width in characters of the longest bar in a text bar chart.
pub const CHART_BAR_WIDTH: usize = 40;

// Export
/// Date format used in the default export file name.
pub const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Prefix of the default export file name.
pub const EXPORT_FILE_PREFIX: &str = "mindcaps_backup_";

// Exercises
/// Seconds spent in each breathing phase.
pub const BREATHING_DWELL_SECS: u64 = 4;
/// Number of inhale/hold/exhale cycles.
pub const BREATHING_CYCLES: u32 = 3;
/// Default meditation length in minutes.
pub const MEDITATION_MINUTES: u64 = 5;
/// Buffer size of the channel carrying timer updates to the display.
pub const TIMER_CHANNEL_CAPACITY: usize = 16;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "mindcaps";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
