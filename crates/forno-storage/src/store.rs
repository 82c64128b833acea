//! `LocalStore`: the SQLite-backed key-value store.
//!
//! The in-memory state held by callers (cart, profile) is authoritative;
//! this store is a mirror. Reads are tolerant: a missing key or a value
//! that fails to deserialize both come back as `None`, never as an error
//! the caller has to handle.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use forno_core::errors::StorageError;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::queries;

/// The local key-value store. Single connection behind a mutex; all
/// access is from the one UI thread plus the save writer.
pub struct LocalStore {
    conn: Mutex<Connection>,
}

impl LocalStore {
    /// Open a file-backed store at the given path. Creates the kv table
    /// and enables WAL.
    pub fn open(path: &Path) -> Result<Arc<Self>, StorageError> {
        let conn = Connection::open(path)
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        queries::kv::create_table(&conn)?;
        Ok(Arc::new(Self {
            conn: Mutex::new(conn),
        }))
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Arc<Self>, StorageError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
        queries::kv::create_table(&conn)?;
        Ok(Arc::new(Self {
            conn: Mutex::new(conn),
        }))
    }

    /// Raw read. Missing key → `Ok(None)`.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        queries::kv::get(&conn, key)
    }

    /// Raw upsert with the current wall-clock timestamp.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        queries::kv::put(&conn, key, value, now_millis())
    }

    /// Delete a key. Absent keys are a no-op.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        queries::kv::delete(&conn, key)
    }

    /// Number of stored keys.
    pub fn count(&self) -> Result<i64, StorageError> {
        let conn = self.conn.lock().map_err(|_| StorageError::Poisoned)?;
        queries::kv::count(&conn)
    }

    /// Tolerant typed read: missing key, storage failure, or malformed
    /// value all yield `None`. Corruption is logged and treated as "no data".
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.get_raw(key) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(key, error = %e, "local read failed; treating as absent");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "malformed stored value; treating as absent");
                None
            }
        }
    }

    /// Typed upsert.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|e| StorageError::Serialization { message: e.to_string() })?;
        self.put_raw(key, &raw)
    }
}

/// Current wall clock in milliseconds since the epoch.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
