//! Draw detection logic for tic-tac-toe.

use super::super::BoardState;
use tracing::instrument;

/// Checks if the game is a draw, i.e. no empty cell remains.
///
/// Assumes neither player has won: a full board with a completed line
/// still reports `true`. Call [`has_won`](super::has_won) first, or use
/// [`evaluate`](super::evaluate) which does.
#[instrument(skip(state))]
pub fn is_draw(state: &BoardState) -> bool {
    state.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::has_won;
    use super::*;
    use crate::games::tictactoe::Player;

    fn fill(rows_top_down: [&str; 3]) -> BoardState {
        let mut board = BoardState::new();
        for (i, row) in rows_top_down.iter().enumerate() {
            let y = 2 - i as i64;
            for (x, c) in row.chars().enumerate() {
                let player = match c {
                    'x' => Player::One,
                    'o' => Player::Two,
                    _ => continue,
                };
                board.place(x as i64, y, player).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&BoardState::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = fill(["x  ", " o ", "   "]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = fill(["xox", "oxx", "oxo"]);
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_still_reports_full() {
        // Documented precondition: is_draw does not look for winners.
        let board = fill(["xxx", "oox", "xoo"]);
        assert!(has_won(&board, Player::One));
        assert!(is_draw(&board));
    }
}
