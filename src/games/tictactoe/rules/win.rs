//! Win detection logic for tic-tac-toe.

use super::super::board::SIZE;
use super::super::{BoardState, Cell, Player};
use tracing::instrument;

/// A winning line as three (x, y) coordinates.
pub type Line = [(usize, usize); 3];

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

fn owns_line(state: &BoardState, player: Player, line: &Line) -> bool {
    line.iter()
        .all(|&(x, y)| state.cell_at(x, y) == Cell::Marked(player))
}

/// Checks whether `player` holds every cell of row `row`.
///
/// Rows past the edge of the board are never complete.
pub fn has_row(state: &BoardState, player: Player, row: usize) -> bool {
    row < SIZE && (0..SIZE).all(|x| state.cell_at(x, row) == Cell::Marked(player))
}

/// Checks whether `player` holds every cell of column `col`.
pub fn has_column(state: &BoardState, player: Player, col: usize) -> bool {
    col < SIZE && (0..SIZE).all(|y| state.cell_at(col, y) == Cell::Marked(player))
}

/// Checks both diagonals for `player`.
pub fn has_diagonal(state: &BoardState, player: Player) -> bool {
    WINNING_LINES[6..]
        .iter()
        .any(|line| owns_line(state, player, line))
}

/// Checks if `player` completed any of the eight winning lines.
#[instrument(skip(state))]
pub fn has_won(state: &BoardState, player: Player) -> bool {
    (0..SIZE).any(|row| has_row(state, player, row))
        || (0..SIZE).any(|col| has_column(state, player, col))
        || has_diagonal(state, player)
}

/// Returns the first line completed by `player`, if any.
pub fn winning_line(state: &BoardState, player: Player) -> Option<Line> {
    WINNING_LINES
        .iter()
        .find(|line| owns_line(state, player, line))
        .copied()
}
