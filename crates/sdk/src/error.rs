//! SDK Error Types

use devclock_core::ClockError;
use jsonrpsee::core::ClientError;
use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Failures talking to a dev node
///
/// Only three things can go wrong on the wire. The node may answer with an
/// error object (`Rpc`). The answer may not decode (`Serialization`).
/// Everything else means the request never completed (`Transport`).
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Node unreachable: {0}")]
    Transport(String),

    #[error("Node rejected call ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Malformed node response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Clock(#[from] ClockError),
}

impl From<ClientError> for SdkError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Call(obj) => SdkError::Rpc {
                code: obj.code(),
                message: obj.message().to_string(),
            },
            ClientError::ParseError(e) => SdkError::Serialization(e),
            ClientError::RequestTimeout => SdkError::Transport("request timed out".to_string()),
            // Transport, RestartNeeded, HttpNotImplemented, ...
            other => SdkError::Transport(other.to_string()),
        }
    }
}

impl From<SdkError> for ClockError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::InvalidUrl(msg) => ClockError::InvalidInput(msg),
            SdkError::Transport(msg) => ClockError::Transport(msg),
            SdkError::Rpc { code, message } => ClockError::Rpc { code, message },
            SdkError::Serialization(e) => ClockError::Serialization(e),
            SdkError::Clock(e) => e,
        }
    }
}
