//! HTTP adapter for Battlesnake
//!
//! This crate exposes a [`HandlerSet`](snake_runtime::HandlerSet) as the four
//! HTTP routes the Battlesnake engine calls (`GET /`, `POST /start`,
//! `POST /move`, `POST /end`) and stamps every response with a fixed
//! `server` header.

pub mod error;
pub mod handlers;
pub mod http_server;
pub mod router;

pub use error::{ApiError, ServerError};
pub use http_server::{run_server, HttpServer, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use router::build_router;
