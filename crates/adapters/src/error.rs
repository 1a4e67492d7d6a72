//! Error types for the HTTP adapter.
//!
//! [`ApiError`] covers failures while answering a single request and renders
//! as a plain-text response. [`ServerError`] covers failures that stop the
//! server from starting or keep it from serving.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use snake_runtime::SnakeError;
use tracing::error;

/// Per-request errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body could not be parsed (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Snake handler failed or panicked (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}

impl From<SnakeError> for ApiError {
    fn from(err: SnakeError) -> Self {
        error!("Snake handler error: {}", err);
        ApiError::Internal(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        error!("Snake handler did not complete: {}", err);
        ApiError::Internal("snake handler panicked".to_string())
    }
}

/// Startup and serving errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}
