//! Combined verdict after a move.

use super::super::{BoardState, GameOutcome, Player};
use super::{has_won, is_draw};
use tracing::{instrument, trace};

/// Classifies the board after `last_player` moved.
///
/// The win check runs before the draw check, so a move that both fills
/// the board and completes a line is a win.
#[instrument(skip(state))]
pub fn evaluate(state: &BoardState, last_player: Player) -> GameOutcome {
    let outcome = if has_won(state, last_player) {
        GameOutcome::Win(last_player)
    } else if is_draw(state) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    };
    trace!(?outcome, "Evaluated board");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let board = BoardState::new();
        assert_eq!(evaluate(&board, Player::One), GameOutcome::InProgress);
        assert_eq!(evaluate(&board, Player::Two), GameOutcome::InProgress);
    }

    #[test]
    fn test_last_move_filling_board_with_line_is_win() {
        // x x x
        // o o x
        // x o o   (x's last move at top-right completes the top row)
        let mut board = BoardState::new();
        let moves = [
            (0, 0, Player::One),
            (1, 0, Player::Two),
            (2, 1, Player::One),
            (2, 0, Player::Two),
            (0, 2, Player::One),
            (0, 1, Player::Two),
            (1, 2, Player::One),
            (1, 1, Player::Two),
            (2, 2, Player::One),
        ];
        for (x, y, player) in moves {
            board.place(x, y, player).unwrap();
        }

        assert!(board.is_full());
        assert_eq!(evaluate(&board, Player::One), GameOutcome::Win(Player::One));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let mut board = BoardState::new();
        board.place(1, 1, Player::One).unwrap();
        let snapshot = board.clone();

        let first = evaluate(&board, Player::One);
        let second = evaluate(&board, Player::One);
        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }
}
