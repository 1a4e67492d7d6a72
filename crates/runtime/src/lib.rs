//! Snake runtime
//!
//! This crate defines the [`Snake`] contract a Battlesnake implementation
//! satisfies, the [`HandlerSet`] the HTTP server dispatches to, and the
//! [`SnakeRegistry`] used to pick a compiled-in snake by name at startup.

pub mod errors;
pub mod registry;
pub mod snake;
pub mod starter;

// Re-export key types for easy access
pub use errors::SnakeError;
pub use registry::{resolve_snake_name, SnakeRegistry, DEFAULT_SNAKE};
pub use snake::{HandlerSet, Snake};
pub use starter::StarterSnake;

/// Resolve a command-line snake argument against the bundled snakes and
/// build its handler set.
pub fn load_snake(arg: &str) -> Result<HandlerSet, SnakeError> {
    let name = resolve_snake_name(arg)?;
    SnakeRegistry::builtin().load(&name)
}
