//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are kept apart from board storage so the
//! driver and the invariants can share them.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_draw;
pub use outcome::evaluate;
pub use win::{WINNING_LINES, has_column, has_diagonal, has_row, has_won, winning_line};
