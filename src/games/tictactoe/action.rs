//! Moves and move errors.
//!
//! A move is a player's intent to mark a grid coordinate. Coordinates are
//! signed because they arrive unchecked from the input layer.

use super::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark at grid coordinate (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Column, 0 is leftmost.
    pub x: i64,
    /// Row, 0 is the bottom row.
    pub y: i64,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.x, self.y)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinate lies outside the 3x3 grid.
    #[display("Cell ({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },

    /// The cell already holds a mark.
    #[display("Cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
    },

    /// The game already ended.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for rejected coordinates; the driver should re-prompt.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. }
        )
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_grouping() {
        assert!(MoveError::OutOfBounds { x: 3, y: 0 }.is_invalid_move());
        assert!(MoveError::CellOccupied { x: 1, y: 1 }.is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
        assert!(!MoveError::WrongPlayer(Player::Two).is_invalid_move());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied { x: 2, y: 0 }.to_string(),
            "Cell (2, 0) is already occupied"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::Two).to_string(),
            "It's not Player 2's turn"
        );
    }

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::One, 0, 2);
        assert_eq!(mov.to_string(), "Player 1 -> (0, 2)");
    }
}
