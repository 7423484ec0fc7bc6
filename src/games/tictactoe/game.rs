//! Game driver state for tic-tac-toe.
//!
//! `Game` owns the board, whose turn it is, the move history and the
//! current outcome. It is the only place the turn switches.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::{BoardState, GameOutcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A single game, from empty board to a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: BoardState,
    pub(super) to_move: Player,
    pub(super) outcome: GameOutcome,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: BoardState::new(),
            to_move: Player::One,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game is over this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Places the current player's mark at (x, y) and evaluates the result.
    ///
    /// The turn passes to the opponent only if the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already ended
    /// - [`MoveError::OutOfBounds`] / [`MoveError::CellOccupied`] for an
    ///   invalid move; the game is unchanged and the same player moves again
    /// - [`MoveError::InvariantViolation`] (debug builds only) if the
    ///   resulting state breaks a game invariant
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, x: i64, y: i64) -> Result<GameOutcome, MoveError> {
        if self.is_over() {
            warn!(outcome = ?self.outcome, "Move attempted after game ended");
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        self.board.place(x, y, player)?;
        self.history.push(Move::new(player, x, y));

        self.outcome = rules::evaluate(&self.board, player);
        match self.outcome {
            GameOutcome::InProgress => self.to_move = player.opponent(),
            outcome => info!(?outcome, moves = self.history.len(), "Game finished"),
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        debug!(outcome = ?self.outcome, "Move applied");
        Ok(self.outcome)
    }

    /// Applies a recorded move, checking that it is that player's turn.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mov: Move) -> Result<GameOutcome, MoveError> {
        if !self.is_over() && mov.player != self.to_move {
            return Err(MoveError::WrongPlayer(mov.player));
        }
        self.play(mov.x, mov.y)
    }

    /// Rebuilds a game from a list of moves.
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for mov in moves {
            game.apply(*mov)?;
        }
        Ok(game)
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
