// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use chrono::Utc;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Get the database file path, creating its directory if needed
///
/// Path structure: {DATA_DIR}/moviehub/moviehub.db
pub fn get_database_path(config: &AppConfig) -> AppResult<PathBuf> {
    std::fs::create_dir_all(&config.data_dir).map_err(AppError::Io)?;
    Ok(config.database_path())
}

/// Create a connection pool
///
/// Pool configuration:
/// - Small pool: one logical writer, a few readers
/// - SQLite in WAL mode
/// - Busy timeout set to avoid immediate errors
///
/// The file is opened once up front, so a file that is not a database
/// fails here instead of stalling the pool build.
pub fn create_connection_pool(db_path: &Path) -> AppResult<ConnectionPool> {
    let first_open = Connection::open(db_path).map_err(AppError::Database)?;
    apply_pragmas(&first_open).map_err(AppError::Database)?;
    drop(first_open);

    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| apply_pragmas(conn));

    let pool = Pool::builder()
        .max_size(4)
        .connection_timeout(Duration::from_secs(5))
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    Ok(pool)
}

/// Create a single-connection pool over a private in-memory database
///
/// The connection is never recycled; it holds the only copy of the data.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(SqliteConnectionManager::memory())
        .map_err(|e| AppError::Pool(format!("Failed to create in-memory pool: {}", e)))
}

fn apply_pragmas(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA busy_timeout = 5000;",
    )
}

/// Rename an unusable database file (and its WAL sidecars) out of the way
///
/// Returns the new path of the main file.
pub fn set_aside_database(db_path: &Path) -> AppResult<PathBuf> {
    let target = with_suffix(
        db_path,
        &format!(".unreadable-{}", Utc::now().format("%Y%m%d%H%M%S")),
    );
    std::fs::rename(db_path, &target).map_err(AppError::Io)?;

    for sidecar in ["-wal", "-shm"] {
        let path = with_suffix(db_path, sidecar);
        if path.exists() {
            std::fs::rename(&path, with_suffix(&target, sidecar)).map_err(AppError::Io)?;
        }
    }

    Ok(target)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for testing)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory().map_err(AppError::Database)?;
    Ok(conn)
}
