//! Router assembly.

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use snake_protocol::SERVER_HEADER_VALUE;
use snake_runtime::HandlerSet;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Builds the router for the four engine routes.
///
/// The `server` header layer is added last so it wraps everything, including
/// the 404 fallback, 405s and body-parsing failures.
pub fn build_router(snake: HandlerSet) -> Router {
    Router::new()
        .route("/", get(handlers::on_info))
        .route("/start", post(handlers::on_start))
        .route("/move", post(handlers::on_move))
        .route("/end", post(handlers::on_end))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::SERVER,
            HeaderValue::from_static(SERVER_HEADER_VALUE),
        ))
        .with_state(snake)
}
