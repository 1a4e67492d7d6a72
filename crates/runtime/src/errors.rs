//! Errors raised while loading or running a snake.

use snake_protocol::ProtocolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnakeError {
    #[error("Unknown snake '{name}' (available: {available})")]
    UnknownSnake { name: String, available: String },

    #[error("Invalid game state: {reason}")]
    InvalidGameState { reason: String },

    #[error("Snake handler failed: {reason}")]
    Handler { reason: String },
}

impl SnakeError {
    /// Convenience constructor for failures inside snake code.
    pub fn handler(reason: impl Into<String>) -> Self {
        SnakeError::Handler {
            reason: reason.into(),
        }
    }
}

impl From<ProtocolError> for SnakeError {
    fn from(err: ProtocolError) -> Self {
        SnakeError::InvalidGameState {
            reason: err.to_string(),
        }
    }
}
