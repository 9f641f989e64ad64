//! Client error types
//!
//! Transport failures come straight from reqwest; API failures are
//! mapped from the status code, with validation bodies flattened into
//! the message. A 2xx answer whose body does not decode as the
//! expected type is reported separately as [`ClientError::InvalidResponse`].

use thiserror::Error;

/// Error produced by an API call
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or the connection failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Successful status but the body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No session token, or the API rejected it (401)
    #[error("Authentication required")]
    Unauthorized,

    /// The logged-in role may not use this endpoint (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rejected payload (400); the field messages are flattened
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other API failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
