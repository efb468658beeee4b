//! Service error taxonomy.
//!
//! Three failure families: validation (caught before any network call),
//! API rejections (non-2xx responses) and transport failures. Every failure
//! is terminal for that attempt — there is no retry or backoff anywhere in
//! this crate; the user retries manually.

use thiserror::Error;

/// Errors from the service clients.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Rejected locally before a request was made.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The service answered with a non-success status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never completed (connection, DNS, timeout).
    #[cfg(feature = "client")]
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A payload failed to encode or decode.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
