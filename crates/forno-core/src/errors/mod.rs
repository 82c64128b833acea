//! Error types shared across the workspace.

pub mod order_error;
pub mod remote_error;
pub mod storage_error;

pub use order_error::OrderError;
pub use remote_error::RemoteError;
pub use storage_error::StorageError;
