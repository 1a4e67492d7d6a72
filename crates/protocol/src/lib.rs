//! Battlesnake protocol types
//!
//! This crate defines the wire types exchanged between a Battlesnake game
//! engine and a snake server: the opaque game state posted to `/start`,
//! `/move` and `/end`, and the responses returned from `/` and `/move`.

pub mod errors;
pub mod game;
pub mod responses;

pub use errors::ProtocolError;
pub use game::{
    Battlesnake, Board, Coord, Customizations, Direction, Game, GameSnapshot, GameState, Ruleset,
};
pub use responses::{InfoResponse, MoveResponse};

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Battlesnake API version advertised by every info response
pub const API_VERSION: &str = "1";

/// Author stamped into every info response
pub const AUTHOR: &str = "IFSP";

/// Value of the `server` header attached to every response
pub const SERVER_HEADER_VALUE: &str = "battlesnake/github/starter-snake-python";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_constants() {
        assert_eq!(API_VERSION, "1");
        assert_eq!(AUTHOR, "IFSP");
        assert!(SERVER_HEADER_VALUE.starts_with("battlesnake/"));
    }
}
