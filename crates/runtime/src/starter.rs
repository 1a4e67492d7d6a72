//! The bundled starter snake.
//!
//! Refuses to turn back onto its own neck and otherwise wanders at random.
//! It exists so a fresh server has something to play with, not to win games.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, warn};

use snake_protocol::{Coord, Direction, GameState, InfoResponse, MoveResponse};

use crate::errors::SnakeError;
use crate::snake::Snake;

/// Move used when every direction has been ruled out.
pub const FALLBACK_MOVE: Direction = Direction::Down;

#[derive(Debug, Clone, Default)]
pub struct StarterSnake;

impl StarterSnake {
    pub fn new() -> Self {
        Self
    }
}

impl Snake for StarterSnake {
    fn info(&self) -> Result<InfoResponse, SnakeError> {
        Ok(InfoResponse::new()
            .with_color("#F30303")
            .with_head("default")
            .with_tail("default")
            .with_version(env!("CARGO_PKG_VERSION")))
    }

    fn start(&self, state: &GameState) -> Result<(), SnakeError> {
        info!(game = state.game_id().unwrap_or("?"), "GAME START");
        Ok(())
    }

    fn make_move(&self, state: &GameState) -> Result<MoveResponse, SnakeError> {
        let snapshot = state.snapshot()?;
        let head = *snapshot
            .you
            .body
            .first()
            .ok_or_else(|| SnakeError::InvalidGameState {
                reason: "you.body is empty".to_string(),
            })?;

        let safe = safe_moves(head, snapshot.you.neck());
        let direction = choose_move(&safe, &mut rand::thread_rng());
        info!("MOVE {}: {}", snapshot.turn, direction);

        Ok(MoveResponse::new(direction))
    }

    fn end(&self, state: &GameState) -> Result<(), SnakeError> {
        info!(game = state.game_id().unwrap_or("?"), "GAME OVER");
        Ok(())
    }
}

/// Direction pointing from the head towards the neck.
///
/// Only the neck's relative position matters, checked horizontally first, so
/// a neck that is not adjacent still rules out the side it lies on. A neck on
/// top of the head (a freshly spawned snake) rules out nothing.
pub fn backwards(head: Coord, neck: Coord) -> Option<Direction> {
    if neck.x < head.x {
        Some(Direction::Left)
    } else if neck.x > head.x {
        Some(Direction::Right)
    } else if neck.y < head.y {
        Some(Direction::Down)
    } else if neck.y > head.y {
        Some(Direction::Up)
    } else {
        None
    }
}

/// Directions that do not turn back onto the neck.
pub fn safe_moves(head: Coord, neck: Option<Coord>) -> Vec<Direction> {
    let blocked = neck.and_then(|neck| backwards(head, neck));
    Direction::ALL
        .into_iter()
        .filter(|direction| Some(*direction) != blocked)
        .collect()
}

/// Pick uniformly among `safe`, or [`FALLBACK_MOVE`] when nothing is safe.
pub fn choose_move<R: Rng + ?Sized>(safe: &[Direction], rng: &mut R) -> Direction {
    match safe.choose(rng) {
        Some(direction) => *direction,
        None => {
            warn!("No safe moves detected! Moving {}", FALLBACK_MOVE);
            FALLBACK_MOVE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn state_with_body(body: serde_json::Value) -> GameState {
        GameState::new(json!({
            "game": { "id": "game-1" },
            "turn": 5,
            "board": { "width": 11, "height": 11 },
            "you": { "body": body }
        }))
    }

    #[test]
    fn test_neck_direction_is_never_safe() {
        let head = Coord::new(5, 5);

        let safe = safe_moves(head, Some(Coord::new(4, 5)));
        assert_eq!(safe, vec![Direction::Up, Direction::Down, Direction::Right]);

        let safe = safe_moves(head, Some(Coord::new(5, 6)));
        assert!(!safe.contains(&Direction::Up));
        assert_eq!(safe.len(), 3);
    }

    #[test]
    fn test_without_neck_all_moves_are_safe() {
        assert_eq!(safe_moves(Coord::new(0, 0), None), Direction::ALL.to_vec());
        // A neck on top of the head (snake just spawned) excludes nothing.
        assert_eq!(
            safe_moves(Coord::new(0, 0), Some(Coord::new(0, 0))),
            Direction::ALL.to_vec()
        );
    }

    #[test]
    fn test_distant_neck_rules_out_its_side() {
        let head = Coord::new(5, 5);

        // Same row, several cells to the left
        assert_eq!(backwards(head, Coord::new(2, 5)), Some(Direction::Left));
        // Diagonal: the horizontal offset is checked first
        assert_eq!(backwards(head, Coord::new(4, 7)), Some(Direction::Left));
        assert_eq!(backwards(head, Coord::new(5, 9)), Some(Direction::Up));

        let safe = safe_moves(head, Some(Coord::new(8, 1)));
        assert_eq!(safe, vec![Direction::Up, Direction::Down, Direction::Left]);
    }

    #[test]
    fn test_choose_move_is_deterministic_for_a_seed() {
        let candidates = [Direction::Up, Direction::Left];
        let first = choose_move(&candidates, &mut StdRng::seed_from_u64(42));
        let second = choose_move(&candidates, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert!(candidates.contains(&first));
    }

    #[test]
    fn test_choose_move_falls_back_when_nothing_is_safe() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_move(&[], &mut rng), FALLBACK_MOVE);
        assert_eq!(FALLBACK_MOVE, Direction::Down);
    }

    #[test]
    fn test_starter_never_moves_backwards() {
        let snake = StarterSnake::new();
        let state = state_with_body(json!([{ "x": 2, "y": 2 }, { "x": 2, "y": 1 }]));

        for _ in 0..50 {
            let response = snake.make_move(&state).unwrap();
            assert_ne!(response.direction(), Some(Direction::Down));
            assert!(response.direction().is_some());
        }
    }

    #[test]
    fn test_starter_rejects_empty_body() {
        let snake = StarterSnake::new();
        let err = snake.make_move(&state_with_body(json!([]))).unwrap_err();
        assert!(matches!(err, SnakeError::InvalidGameState { .. }));

        let err = snake.make_move(&GameState::new(json!("nope"))).unwrap_err();
        assert!(matches!(err, SnakeError::InvalidGameState { .. }));
    }

    #[test]
    fn test_starter_info() {
        let info = StarterSnake::new().info().unwrap();
        assert_eq!(info.get("color"), Some(&json!("#F30303")));
        assert_eq!(info.get("head"), Some(&json!("default")));
        assert_eq!(info.get("version"), Some(&json!(env!("CARGO_PKG_VERSION"))));
        assert_eq!(info.get("author"), None);
    }
}
