//! SQLite-backed key-value store

use rusqlite::{params, OptionalExtension};

use super::Database;
use crate::store::{KeyValueStore, StoreResult};

/// Key-value store persisted in the `kv_store` table
#[derive(Clone)]
pub struct SqliteStore {
    database: Database,
}

impl SqliteStore {
    /// Wrap a database whose migrations have already run
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value: Option<String> = self.database.with_conn(|conn| {
            Ok(conn
                .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?)
        })?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.database.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv_store (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = datetime('now')
                "#,
                params![key, value],
            )?;
            Ok(())
        })?;
        Ok(())
    }
}
