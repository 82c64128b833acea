//! Local-persistence errors.
//!
//! These never reach the user: callers log them and degrade to
//! in-memory-only behavior for the session.

/// Errors that can occur in the local key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("serialization error: {message}")]
    Serialization { message: String },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("save writer disconnected")]
    WriterDisconnected,
}
