//! Protocol errors module

use thiserror::Error;

/// Errors raised while decoding engine payloads or building responses
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The payload is not valid JSON, or a typed view could not be built
    #[error("Malformed JSON: {source}")]
    SerializationError { source: serde_json::Error },

    /// Valid JSON, but not the shape the operation needs
    #[error("Unexpected payload shape: {reason}")]
    InvalidFormat { reason: String },
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::SerializationError { source: err }
    }
}
