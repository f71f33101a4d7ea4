// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Durable client storage.
//!
//! A small SQLite key/value table holding JSON documents under fixed keys:
//! the signed-in session, the last-known-good shelf snapshot, and the
//! active collection selection.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::Collection;

/// Key of the persisted session.
pub const SESSION_KEY: &str = "shared-shelf-session";
/// Key of the last-known-good collection tree.
pub const SNAPSHOT_KEY: &str = "shared-shelf-snapshot";
/// Key of the selected collection id.
pub const ACTIVE_KEY: &str = "shared-shelf-active";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Last-known-good collection tree, shown when the remote read fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub collections: Vec<Collection>,
    pub saved_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(collections: Vec<Collection>) -> Self {
        Snapshot { collections, saved_at: Utc::now() }
    }
}

/// SQLite-backed key/value store.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open the store at the given path, creating the file and parent directory if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Storage { conn })
    }

    /// Open a throwaway in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Storage { conn })
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Deletes a key. Returns whether it existed.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(n > 0)
    }

    /// Reads and deserializes a JSON document.
    ///
    /// Fails with [`Error::CorruptedData`] if the stored text does not parse.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| Error::CorruptedData(format!("{key}: {e}"))),
            None => Ok(None),
        }
    }

    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw)
    }

    /// Loads the stored snapshot, treating a corrupt entry as absent.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        match self.get_json(SNAPSHOT_KEY) {
            Err(Error::CorruptedData(reason)) => {
                tracing::warn!(%reason, "discarding unreadable snapshot");
                Ok(None)
            }
            other => other,
        }
    }

    pub fn save_snapshot(&self, collections: &[Collection]) -> Result<()> {
        self.set_json(SNAPSHOT_KEY, &Snapshot::new(collections.to_vec()))
    }

    pub fn active(&self) -> Result<Option<String>> {
        self.get(ACTIVE_KEY)
    }

    pub fn set_active(&self, id: Option<&str>) -> Result<()> {
        match id {
            Some(id) => self.set(ACTIVE_KEY, id),
            None => self.remove(ACTIVE_KEY).map(|_| ()),
        }
    }

    /// Drops the snapshot and selection; used on sign-out.
    pub fn clear_local(&self) -> Result<()> {
        self.remove(SNAPSHOT_KEY)?;
        self.remove(ACTIVE_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;
