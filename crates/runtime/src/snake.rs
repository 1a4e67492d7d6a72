//! The snake contract and the handler set built from it.
//!
//! A [`Snake`] answers the four engine callbacks. The HTTP layer never talks
//! to a snake directly: it is handed a [`HandlerSet`], a fixed bundle of four
//! typed callables that can be built from any snake or from plain closures.

use std::fmt;
use std::sync::Arc;

use snake_protocol::{GameState, InfoResponse, MoveResponse};

use crate::errors::SnakeError;

/// A Battlesnake implementation.
pub trait Snake: Send + Sync {
    /// Appearance and metadata, served from `GET /`.
    fn info(&self) -> Result<InfoResponse, SnakeError>;

    /// Called once when a game begins.
    fn start(&self, _state: &GameState) -> Result<(), SnakeError> {
        Ok(())
    }

    /// Called every turn; returns the next move.
    fn make_move(&self, state: &GameState) -> Result<MoveResponse, SnakeError>;

    /// Called once when a game is over.
    fn end(&self, _state: &GameState) -> Result<(), SnakeError> {
        Ok(())
    }
}

type InfoHandler = dyn Fn() -> Result<InfoResponse, SnakeError> + Send + Sync;
type GameHandler = dyn Fn(&GameState) -> Result<(), SnakeError> + Send + Sync;
type MoveHandler = dyn Fn(&GameState) -> Result<MoveResponse, SnakeError> + Send + Sync;

/// The four callbacks the server dispatches to.
///
/// Every field is required at construction, so a partially populated set
/// cannot exist. Cloning is cheap and shares the underlying callables.
#[derive(Clone)]
pub struct HandlerSet {
    info: Arc<InfoHandler>,
    start: Arc<GameHandler>,
    make_move: Arc<MoveHandler>,
    end: Arc<GameHandler>,
}

impl HandlerSet {
    /// Build a handler set from four closures.
    pub fn new<I, S, M, E>(info: I, start: S, make_move: M, end: E) -> Self
    where
        I: Fn() -> Result<InfoResponse, SnakeError> + Send + Sync + 'static,
        S: Fn(&GameState) -> Result<(), SnakeError> + Send + Sync + 'static,
        M: Fn(&GameState) -> Result<MoveResponse, SnakeError> + Send + Sync + 'static,
        E: Fn(&GameState) -> Result<(), SnakeError> + Send + Sync + 'static,
    {
        Self {
            info: Arc::new(info),
            start: Arc::new(start),
            make_move: Arc::new(make_move),
            end: Arc::new(end),
        }
    }

    /// Route all four callbacks to a shared snake.
    pub fn from_snake(snake: Arc<dyn Snake>) -> Self {
        let info = Arc::clone(&snake);
        let start = Arc::clone(&snake);
        let make_move = Arc::clone(&snake);
        let end = snake;

        Self::new(
            move || info.info(),
            move |state| start.start(state),
            move |state| make_move.make_move(state),
            move |state| end.end(state),
        )
    }

    pub fn info(&self) -> Result<InfoResponse, SnakeError> {
        (self.info)()
    }

    pub fn start(&self, state: &GameState) -> Result<(), SnakeError> {
        (self.start)(state)
    }

    pub fn make_move(&self, state: &GameState) -> Result<MoveResponse, SnakeError> {
        (self.make_move)(state)
    }

    pub fn end(&self, state: &GameState) -> Result<(), SnakeError> {
        (self.end)(state)
    }
}

impl fmt::Debug for HandlerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerSet").finish_non_exhaustive()
    }
}

impl<S: Snake + 'static> From<Arc<S>> for HandlerSet {
    fn from(snake: Arc<S>) -> Self {
        HandlerSet::from_snake(snake)
    }
}
