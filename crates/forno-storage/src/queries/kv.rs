//! kv table queries.

use forno_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

/// Create the kv table if it does not exist.
pub fn create_table(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv (
             key TEXT PRIMARY KEY,
             value TEXT NOT NULL,
             updated_at INTEGER NOT NULL
         )",
        [],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Fetch the raw value for a key, `None` when absent.
pub fn get(conn: &Connection, key: &str) -> Result<Option<String>, StorageError> {
    conn.query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
        row.get(0)
    })
    .optional()
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

/// Upsert a value, unconditionally overwriting any prior entry.
pub fn put(
    conn: &Connection,
    key: &str,
    value: &str,
    updated_at: i64,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
        params![key, value, updated_at],
    )
    .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Delete a key. Absent keys are a no-op.
pub fn delete(conn: &Connection, key: &str) -> Result<(), StorageError> {
    conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    Ok(())
}

/// Count stored keys.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}
