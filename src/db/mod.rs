//! SQLite storage for mood, gratitude and sleep entries.
//!
//! The store is append-only: each kind of entry lives in its own table, rows
//! are inserted once with a store-assigned id and timestamp, and nothing is
//! ever updated or deleted. A [`Database`] handle is opened once at startup
//! and passed down to every operation that needs it.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `moods`, `gratitudes`, `sleep`: append and list operations per kind
//! - `aggregate`: grouped counts for analytics
//! - `lock`: advisory lock keeping a second process out of the store
//!
//! # Example
//!
//! ```no_run
//! use mindcaps::db::Database;
//! use std::path::Path;
//!
//! let db = Database::open(Path::new("/tmp/mindcaps.db"))?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod gratitudes;
pub mod lock;
pub mod moods;
pub mod schema;
pub mod sleep;

use crate::errors::{AppResult, DatabaseError};
use chrono::{DateTime, Utc};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle.
///
/// The pool holds a single connection, so every statement issued through
/// the handle is serialized.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite store at `db_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is not a database.
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);
        let db = Self::with_manager(Pool::builder(), SqliteConnectionManager::file(db_path))?;
        info!("Database opened successfully");
        Ok(db)
    }

    /// Opens a private in-memory store. Used by tests and benchmarks.
    ///
    /// Every new in-memory connection is an empty database, so the single
    /// pooled connection is never retired for idleness or age.
    pub fn open_in_memory() -> AppResult<Self> {
        let builder = Pool::builder().idle_timeout(None).max_lifetime(None);
        Self::with_manager(builder, SqliteConnectionManager::memory())
    }

    fn with_manager(
        builder: r2d2::Builder<SqliteConnectionManager>,
        manager: SqliteConnectionManager,
    ) -> AppResult<Self> {
        let pool = builder
            .max_size(1)
            .build(manager)
            .map_err(DatabaseError::Pool)?;

        // Fail early on a file that is not a database
        let conn = pool.get().map_err(DatabaseError::Pool)?;
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(DatabaseError::Sqlite)?;
        drop(conn);

        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is unavailable.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent and safe to call multiple times.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}

/// Timestamp assigned to a row at insert time.
pub(crate) fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

/// Parses a stored timestamp column.
pub(crate) fn parse_timestamp(
    table: &str,
    raw: &str,
) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::CorruptRow(table.to_string(), format!("timestamp '{}': {}", raw, e)))
}

/// Row count of one of the entry tables.
pub(crate) fn count_rows(conn: &Connection, table: &str) -> AppResult<usize> {
    let count: i64 = conn
        .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
        .map_err(DatabaseError::Sqlite)?;
    Ok(count as usize)
}
