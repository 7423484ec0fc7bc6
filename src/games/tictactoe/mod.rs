//! Tic-tac-toe: board state, win/draw rules and the game driver state.

mod action;
mod board;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{BoardState, SIZE};
pub use game::Game;
pub use types::{Cell, GameOutcome, Player};
