//! Monotonic board invariant: cells never change once marked.

use super::super::{BoardState, Game};
use super::Invariant;

/// Invariant: marks are never overwritten.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = BoardState::new();

        for mov in game.history() {
            if reconstructed.place(mov.x, mov.y, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
