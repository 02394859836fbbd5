// src/repositories/collection_repository.rs
//
// Durable storage for the favorites and watchlist collections.
//
// Each collection is one row of `kv_store`: the key is the collection's
// storage key, the value its JSON text. Decoding is left to the caller.

use std::sync::Arc;

use chrono::Utc;
use rusqlite::params;

use crate::db::ConnectionPool;
use crate::domain::CollectionKind;
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait CollectionRepository: Send + Sync {
    /// Stored JSON for a collection, `None` when nothing was ever saved
    fn load(&self, kind: CollectionKind) -> AppResult<Option<String>>;

    /// Overwrite the stored JSON for a collection
    fn save(&self, kind: CollectionKind, json: &str) -> AppResult<()>;
}

pub struct SqliteCollectionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCollectionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl CollectionRepository for SqliteCollectionRepository {
    fn load(&self, kind: CollectionKind) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare("SELECT value FROM kv_store WHERE key = ?1")?;

        match stmt.query_row(params![kind.storage_key()], |row| row.get::<_, String>(0)) {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn save(&self, kind: CollectionKind, json: &str) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![kind.storage_key(), json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}
