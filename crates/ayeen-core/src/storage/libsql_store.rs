//! libSQL-backed key-value store

use std::path::Path;

use super::KeyValueStore;
use crate::db::Database;
use crate::Result;

/// libSQL implementation of [`KeyValueStore`] over the `kv_store` table
pub struct LibSqlKeyValueStore {
    db: Database,
}

impl LibSqlKeyValueStore {
    /// Wrap an already opened database
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Open (or create) a store backed by the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Database::open(path).await?))
    }

    /// Open a store backed by an in-memory database
    pub async fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Database::open_in_memory().await?))
    }
}

impl KeyValueStore for LibSqlKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut rows = self
            .db
            .connection()
            .query("SELECT value FROM kv_store WHERE key = ?", [key])
            .await?;

        if let Some(row) = rows.next().await? {
            let value: String = row.get(0)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?, ?)",
                [key, value],
            )
            .await?;
        tracing::debug!("Stored {} bytes under '{key}'", value.len());
        Ok(())
    }
}
