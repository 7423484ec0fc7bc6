//! Alternating turn invariant: players alternate One, Two, One, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: players alternate turns, starting with player one.
///
/// While the game runs, `to_move` follows from the history length. After
/// it ends, `to_move` stays on the player who made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.to_move() == Player::One;
        };

        if first.player != Player::One {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = if game.is_over() {
            history[history.len() - 1].player
        } else if history.len() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        };

        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
