// Central Error Type for devclock

use thiserror::Error;

/// Errors surfaced by a time-advance invocation.
///
/// None of these are retried. The first one raised ends the invocation.
#[derive(Error, Debug)]
pub enum ClockError {
    /// Node unreachable, connection refused, or request timed out
    #[error("Transport error: {0}")]
    Transport(String),

    /// Node answered with a JSON-RPC error object (e.g. method not found)
    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Node answered, but not with the shape we expected
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using ClockError
pub type Result<T> = std::result::Result<T, ClockError>;
