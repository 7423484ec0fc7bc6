//! The 3x3 grid and its single mutation.

use super::action::MoveError;
use super::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Width and height of the grid.
pub const SIZE: usize = 3;

/// 3x3 tic-tac-toe grid indexed by (column, row).
///
/// Row 0 is the bottom row. Cells only ever go from `Empty` to `Marked`,
/// and the only way to mark one is [`BoardState::place`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells stored as `cells[row][column]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl BoardState {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Maps raw coordinates to grid indices, `None` when off the board.
    fn checked(x: i64, y: i64) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < SIZE && y < SIZE).then_some((x, y))
    }

    /// Returns true iff (x, y) is on the board and the cell is empty.
    ///
    /// Bounds are checked before the grid is touched, so any coordinate
    /// pair is safe to pass.
    pub fn is_valid_move(&self, x: i64, y: i64) -> bool {
        Self::checked(x, y).is_some_and(|(col, row)| self.cells[row][col].is_empty())
    }

    /// Marks (x, y) for `player`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`]
    /// when [`is_valid_move`](Self::is_valid_move) is false. The board is
    /// left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(&mut self, x: i64, y: i64, player: Player) -> Result<(), MoveError> {
        let (col, row) = Self::checked(x, y).ok_or(MoveError::OutOfBounds { x, y })?;

        if !self.cells[row][col].is_empty() {
            debug!("Rejected move onto occupied cell");
            return Err(MoveError::CellOccupied { x, y });
        }

        self.cells[row][col] = Cell::Marked(player);
        Ok(())
    }

    /// Returns the cell at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 3 or more. Use [`get`](Self::get)
    /// for unchecked input.
    pub fn cell_at(&self, x: usize, y: usize) -> Cell {
        self.cells[y][x]
    }

    /// Returns the cell at (x, y), or `None` when off the board.
    pub fn get(&self, x: i64, y: i64) -> Option<Cell> {
        Self::checked(x, y).map(|(col, row)| self.cells[row][col])
    }

    /// Rows from bottom (index 0) to top.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Every cell with its (x, y) coordinate.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| ((x, y), *cell)))
    }

    /// Coordinates of all empty cells.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }

    /// Overwrites a cell, bypassing validation. Lets tests build corrupt states.
    #[cfg(test)]
    pub(super) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.cells[y][x] = cell;
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug view: top row first, cells separated by `|`, rows by `-----`.
impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-----")?;
            }
            let line = row
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_negative_coordinates_rejected() {
        let board = BoardState::new();
        assert!(!board.is_valid_move(-1, 0));
        assert!(!board.is_valid_move(0, -1));
        assert!(!board.is_valid_move(i64::MIN, i64::MAX));
        assert_eq!(board.get(-1, 1), None);
    }

    #[test]
    fn test_place_out_of_bounds_is_error() {
        let mut board = BoardState::new();
        assert_eq!(
            board.place(3, 0, Player::One),
            Err(MoveError::OutOfBounds { x: 3, y: 0 })
        );
        assert_eq!(board, BoardState::new());
    }

    #[test]
    fn test_place_occupied_keeps_original_mark() {
        let mut board = BoardState::new();
        board.place(1, 1, Player::One).unwrap();
        assert_eq!(
            board.place(1, 1, Player::Two),
            Err(MoveError::CellOccupied { x: 1, y: 1 })
        );
        assert_eq!(board.cell_at(1, 1), Cell::Marked(Player::One));
    }

    #[test]
    fn test_count_marks() {
        let mut board = BoardState::new();
        board.place(0, 0, Player::One).unwrap();
        board.place(2, 2, Player::One).unwrap();
        board.place(1, 0, Player::Two).unwrap();
        assert_eq!(board.count(Player::One), 2);
        assert_eq!(board.count(Player::Two), 1);
    }

    #[test]
    fn test_display_prints_top_row_first() {
        // Bottom row first:
        // [[0,1,0], [1,2,0], [2,0,0]]
        let mut board = BoardState::new();
        board.place(1, 0, Player::One).unwrap();
        board.place(0, 1, Player::One).unwrap();
        board.place(1, 1, Player::Two).unwrap();
        board.place(0, 2, Player::Two).unwrap();

        assert_eq!(board.to_string(), "o| | \n-----\nx|o| \n-----\n |x| ");
    }
}
