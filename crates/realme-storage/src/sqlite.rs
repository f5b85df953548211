// SPDX-FileCopyrightText: 2026 Realme Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed key-value store.
//!
//! One connection guarded by a mutex; every write is serialized through it.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use realme_config::model::StorageConfig;
use realme_core::{AdapterType, HealthStatus, KeyValueStore, PluginAdapter, RealmeError};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::migrations::run_migrations;

fn storage_err(e: rusqlite::Error) -> RealmeError {
    RealmeError::Storage {
        source: Box::new(e),
    }
}

/// Durable store backed by the `kv` table.
#[derive(Debug)]
pub struct SqliteKeyValueStore {
    conn: Mutex<Connection>,
}

impl SqliteKeyValueStore {
    /// Opens (creating if needed) the database at `path` and migrates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RealmeError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| RealmeError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = Connection::open(path).map_err(storage_err)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )
        .map_err(storage_err)?;

        let store = Self::from_connection(conn)?;
        info!(path = %path.display(), "sqlite store opened");
        Ok(store)
    }

    /// Opens the database configured in `[storage]`.
    pub fn from_config(config: &StorageConfig) -> Result<Self, RealmeError> {
        Self::open(&config.database_path)
    }

    /// A private in-memory database, migrated like a file-backed one.
    pub fn open_in_memory() -> Result<Self, RealmeError> {
        Self::from_connection(Connection::open_in_memory().map_err(storage_err)?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self, RealmeError> {
        run_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, RealmeError> {
        self.conn
            .lock()
            .map_err(|_| RealmeError::Internal("sqlite connection lock poisoned".to_string()))
    }
}

#[async_trait]
impl PluginAdapter for SqliteKeyValueStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Persistence
    }

    async fn health_check(&self) -> Result<HealthStatus, RealmeError> {
        self.conn()?
            .execute_batch("SELECT 1;")
            .map_err(storage_err)?;
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), RealmeError> {
        self.conn()?
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
            .map_err(storage_err)?;
        debug!("sqlite store checkpointed");
        Ok(())
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RealmeError> {
        self.conn()?
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(storage_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RealmeError> {
        let now = chrono::Utc::now().to_rfc3339();
        self.conn()?
            .execute(
                "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(storage_err)?;
        debug!(key, bytes = value.len(), "kv written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RealmeError> {
        self.conn()?
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(storage_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("realme.db");

        {
            let store = SqliteKeyValueStore::open(&path).unwrap();
            store.set("achievements-a@b.c", "[]").unwrap();
            store.set("achievements-a@b.c", "[\"FirstJournal\"]").unwrap();
        }

        let store = SqliteKeyValueStore::open(&path).unwrap();
        assert_eq!(
            store.get("achievements-a@b.c").unwrap().as_deref(),
            Some("[\"FirstJournal\"]")
        );
    }

    #[test]
    fn missing_key_is_none_and_remove_is_idempotent() {
        let store = SqliteKeyValueStore::open_in_memory().unwrap();
        assert_eq!(store.get("nope").unwrap(), None);
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn from_config_uses_database_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            database_path: dir.path().join("cfg.db").to_string_lossy().into_owned(),
        };
        let store = SqliteKeyValueStore::from_config(&config).unwrap();
        store.set("x", "1").unwrap();
        assert!(dir.path().join("cfg.db").exists());
    }

    #[tokio::test]
    async fn health_check_and_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteKeyValueStore::open(dir.path().join("h.db")).unwrap();
        assert_eq!(store.health_check().await.unwrap(), HealthStatus::Healthy);
        store.shutdown().await.unwrap();
    }
}
