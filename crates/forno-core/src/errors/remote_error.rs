//! Remote-store failures. No structured codes cross into the UI layer;
//! the message is for logs, the variant for tests.

/// Errors from the hosted backend. None of these are retried
/// automatically; every failure is terminal for that user action.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("remote store unavailable: {message}")]
    Unavailable { message: String },

    #[error("remote store rejected the request: {message}")]
    Rejected { message: String },

    #[error("{what} not found")]
    NotFound { what: String },
}
