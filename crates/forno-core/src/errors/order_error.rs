//! Checkout errors.

use super::remote_error::RemoteError;

/// Why an order was not placed. Validation variants are raised
/// synchronously, before any remote call is attempted.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Remote(#[from] RemoteError),
}
