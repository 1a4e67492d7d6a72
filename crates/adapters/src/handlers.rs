//! Route handlers for the four engine callbacks.
//!
//! Bodies are read as raw bytes and parsed here, so the engine does not have
//! to send a `content-type` header. Snake callbacks are synchronous and run
//! on the blocking pool; a panic there becomes a 500 for that request only.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use snake_protocol::{GameState, InfoResponse};
use snake_runtime::{HandlerSet, SnakeError};
use tracing::debug;

use crate::error::ApiError;

/// Literal body returned by `/start` and `/end`.
pub const OK_BODY: &str = "ok";

/// `GET /`
pub async fn on_info(State(handlers): State<HandlerSet>) -> Result<Json<InfoResponse>, ApiError> {
    let info = run_blocking(move || handlers.info()).await?;
    Ok(Json(info.stamped()))
}

/// `POST /start`
pub async fn on_start(
    State(handlers): State<HandlerSet>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let state = parse_game_state(&body)?;
    debug!("start: game {:?}", state.game_id());
    run_blocking(move || handlers.start(&state)).await?;
    Ok(OK_BODY)
}

/// `POST /move`
pub async fn on_move(
    State(handlers): State<HandlerSet>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let state = parse_game_state(&body)?;
    let response = run_blocking(move || handlers.make_move(&state)).await?;
    Ok(Json(response.into_value()))
}

/// `POST /end`
pub async fn on_end(
    State(handlers): State<HandlerSet>,
    body: Bytes,
) -> Result<&'static str, ApiError> {
    let state = parse_game_state(&body)?;
    debug!("end: game {:?}", state.game_id());
    run_blocking(move || handlers.end(&state)).await?;
    Ok(OK_BODY)
}

/// Fallback for unknown routes.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

fn parse_game_state(body: &[u8]) -> Result<GameState, ApiError> {
    GameState::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}

async fn run_blocking<T, F>(call: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, SnakeError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(call).await??)
}
