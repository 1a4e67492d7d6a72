//! Registry of snakes that can be served by name.
//!
//! Snakes are compiled into the binary and looked up by name at startup.
//! Nothing is ever loaded from an arbitrary path at runtime.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::SnakeError;
use crate::snake::{HandlerSet, Snake};
use crate::starter::StarterSnake;

type SnakeFactory = Box<dyn Fn() -> Arc<dyn Snake> + Send + Sync>;

/// Name of the snake served when nothing else is registered.
pub const DEFAULT_SNAKE: &str = "starter";

/// Name to factory lookup table.
pub struct SnakeRegistry {
    factories: BTreeMap<String, SnakeFactory>,
}

impl SnakeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// A registry holding every bundled snake.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(DEFAULT_SNAKE, || Arc::new(StarterSnake::new()));
        registry
    }

    /// Register a snake under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn Snake> + Send + Sync + 'static,
    {
        let name = name.into();
        debug!("Registering snake '{}'", name);
        self.factories.insert(name, Box::new(factory));
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Instantiate the snake registered under `name` and wrap it in a
    /// complete [`HandlerSet`].
    pub fn load(&self, name: &str) -> Result<HandlerSet, SnakeError> {
        if !self.contains(name) {
            return Err(SnakeError::UnknownSnake {
                name: name.to_string(),
                available: self.names().join(", "),
            });
        }
        let factory = &self.factories[name];

        info!("Loaded snake '{}'", name);
        Ok(HandlerSet::from_snake(factory()))
    }
}

impl Default for SnakeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Turn a command-line snake argument into a registry name.
///
/// A bare name is used as-is. Anything that looks like a file path
/// (`snakes/starter.py`, `starter.rs`) resolves to its file stem.
pub fn resolve_snake_name(arg: &str) -> Result<String, SnakeError> {
    let trimmed = arg.trim();
    let path = Path::new(trimmed);

    let looks_like_path = path.components().count() > 1 || path.extension().is_some();
    let name = if looks_like_path {
        path.file_stem().and_then(|stem| stem.to_str())
    } else {
        Some(trimmed)
    };

    match name {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(SnakeError::UnknownSnake {
            name: arg.to_string(),
            available: "a snake name or a path whose file name is one".to_string(),
        }),
    }
}
