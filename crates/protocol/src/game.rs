//! Game state posted by the engine.
//!
//! The adapter server treats [`GameState`] as an opaque JSON document and
//! hands it to the snake untouched. Snakes that want structured access can
//! ask for a [`GameSnapshot`], a lenient typed view of the same document.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ProtocolError;
use crate::Result;

/// Opaque game state as received in a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameState(Value);

impl GameState {
    /// Wrap an already-parsed JSON document.
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a request body. Any valid JSON document is accepted.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(Self(serde_json::from_slice(bytes)?))
    }

    /// Borrow the raw JSON document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Game id, if the document carries one.
    pub fn game_id(&self) -> Option<&str> {
        self.0.pointer("/game/id").and_then(Value::as_str)
    }

    /// Turn number, if the document carries one.
    pub fn turn(&self) -> Option<u64> {
        self.0.get("turn").and_then(Value::as_u64)
    }

    /// Build a typed view of the document.
    ///
    /// Unknown fields are ignored and missing fields take their defaults, so
    /// only a document that is not a JSON object, or has a field of the wrong
    /// type, is rejected.
    pub fn snapshot(&self) -> Result<GameSnapshot> {
        if !self.0.is_object() {
            return Err(ProtocolError::InvalidFormat {
                reason: "game state must be a JSON object".to_string(),
            });
        }
        Ok(GameSnapshot::deserialize(&self.0)?)
    }
}

impl From<Value> for GameState {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Typed view of a [`GameState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSnapshot {
    pub game: Game,
    pub turn: u64,
    pub board: Board,
    pub you: Battlesnake,
}

/// Game metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    pub id: String,
    pub ruleset: Ruleset,
    pub map: String,
    pub source: String,
    /// Milliseconds the engine waits for each response
    pub timeout: u64,
}

/// Ruleset the game is played under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub name: String,
    pub version: String,
    pub settings: Value,
}

/// Board layout for the current turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    pub height: i32,
    pub width: i32,
    pub food: Vec<Coord>,
    pub hazards: Vec<Coord>,
    pub snakes: Vec<Battlesnake>,
}

impl Board {
    /// Whether the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }
}

/// A snake on the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Battlesnake {
    pub id: String,
    pub name: String,
    pub health: i32,
    /// Head first, tail last
    pub body: Vec<Coord>,
    pub head: Coord,
    pub length: u32,
    /// Latency of the previous response in milliseconds, as a string
    pub latency: String,
    pub shout: String,
    pub squad: String,
    pub customizations: Customizations,
}

impl Battlesnake {
    /// The segment directly behind the head.
    pub fn neck(&self) -> Option<Coord> {
        self.body.get(1).copied()
    }
}

/// Cosmetic settings of a snake.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customizations {
    pub color: String,
    pub head: String,
    pub tail: String,
}

/// A board position. `(0, 0)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position reached by moving one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A move a snake can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order the engine documents them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Wire name of the direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Coordinate change applied by this move.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_state() -> Value {
        json!({
            "game": {
                "id": "game-00fe20da",
                "ruleset": { "name": "standard", "version": "v1.2.3" },
                "map": "standard",
                "timeout": 500,
                "source": "league"
            },
            "turn": 14,
            "board": {
                "height": 11,
                "width": 11,
                "food": [{ "x": 5, "y": 5 }],
                "hazards": [],
                "snakes": []
            },
            "you": {
                "id": "snake-508e96ac",
                "name": "My Snake",
                "health": 54,
                "body": [{ "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 2, "y": 0 }],
                "latency": "111",
                "head": { "x": 0, "y": 0 },
                "length": 3,
                "shout": "why are we shouting??",
                "customizations": { "color": "#FF0000", "head": "pixel", "tail": "pixel" },
                "unexpected": true
            }
        })
    }

    #[test]
    fn test_game_state_is_passed_through_unchanged() {
        let raw = sample_state();
        let state = GameState::from_slice(raw.to_string().as_bytes()).unwrap();

        assert_eq!(state.as_value(), &raw);
        assert_eq!(serde_json::to_value(&state).unwrap(), raw);
        assert_eq!(state.game_id(), Some("game-00fe20da"));
        assert_eq!(state.turn(), Some(14));
    }

    #[test]
    fn test_malformed_body_is_rejected() {
        let err = GameState::from_slice(b"{\"turn\": ").unwrap_err();
        assert!(matches!(err, ProtocolError::SerializationError { .. }));
    }

    #[test]
    fn test_snapshot_reads_typed_fields() {
        let snapshot = GameState::new(sample_state()).snapshot().unwrap();

        assert_eq!(snapshot.game.ruleset.name, "standard");
        assert_eq!(snapshot.game.timeout, 500);
        assert_eq!(snapshot.board.width, 11);
        assert_eq!(snapshot.board.food, vec![Coord::new(5, 5)]);
        assert_eq!(snapshot.you.health, 54);
        assert_eq!(snapshot.you.neck(), Some(Coord::new(1, 0)));
        assert_eq!(snapshot.you.customizations.head, "pixel");
    }

    #[test]
    fn test_snapshot_tolerates_missing_fields() {
        let snapshot = GameState::new(json!({ "turn": 3 })).snapshot().unwrap();

        assert_eq!(snapshot.turn, 3);
        assert!(snapshot.you.body.is_empty());
        assert_eq!(snapshot.you.neck(), None);
    }

    #[test]
    fn test_snapshot_rejects_non_objects() {
        let err = GameState::new(json!([1, 2, 3])).snapshot().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidFormat { .. }));

        let err = GameState::new(json!({ "turn": "soon" })).snapshot().unwrap_err();
        assert!(matches!(err, ProtocolError::SerializationError { .. }));
    }

    #[test]
    fn test_direction_geometry() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin.step(Direction::Up), Coord::new(3, 4));
        assert_eq!(origin.step(Direction::Left), Coord::new(2, 3));

        for direction in Direction::ALL {
            assert_eq!(origin.step(direction).step(direction.opposite()), origin);
        }

        assert_eq!(serde_json::to_value(Direction::Right).unwrap(), json!("right"));
        assert_eq!(Direction::Down.to_string(), "down");
    }

    #[test]
    fn test_board_bounds() {
        let board = Board {
            width: 11,
            height: 11,
            ..Default::default()
        };
        assert!(board.contains(Coord::new(0, 0)));
        assert!(board.contains(Coord::new(10, 10)));
        assert!(!board.contains(Coord::new(11, 0)));
        assert!(!board.contains(Coord::new(0, -1)));
    }
}
