//! Tests for board state validation and placement.

use noughts::{BoardState, Cell, MoveError, Player, SIZE};

#[test]
fn test_out_of_range_never_valid() {
    let mut board = BoardState::new();
    let coords = [-3, -1, 3, 4, 100];

    for _ in 0..2 {
        for &x in &coords {
            for y in -1..5 {
                assert!(!board.is_valid_move(x, y), "({x}, {y}) accepted");
                assert!(!board.is_valid_move(y, x), "({y}, {x}) accepted");
            }
        }
        // Same check on a full board.
        for x in 0..3 {
            for y in 0..3 {
                let _ = board.place(x, y, Player::One);
            }
        }
    }
}

#[test]
fn test_place_frame_condition() {
    let mut board = BoardState::new();
    board.place(2, 1, Player::Two).unwrap();
    let before = board.clone();

    assert!(board.is_valid_move(0, 2));
    board.place(0, 2, Player::One).unwrap();

    assert!(!board.is_valid_move(0, 2));
    assert_eq!(board.cell_at(0, 2), Cell::Marked(Player::One));
    for x in 0..SIZE {
        for y in 0..SIZE {
            if (x, y) != (0, 2) {
                assert_eq!(board.cell_at(x, y), before.cell_at(x, y));
            }
        }
    }
}

#[test]
fn test_place_on_occupied_cell_rejected() {
    let mut board = BoardState::new();
    board.place(1, 2, Player::One).unwrap();
    let before = board.clone();

    let result = board.place(1, 2, Player::Two);
    assert_eq!(result, Err(MoveError::CellOccupied { x: 1, y: 2 }));
    assert!(result.unwrap_err().is_invalid_move());
    assert_eq!(board, before);
}

#[test]
fn test_get_is_total() {
    let mut board = BoardState::new();
    board.place(0, 0, Player::Two).unwrap();
    assert_eq!(board.get(0, 0), Some(Cell::Marked(Player::Two)));
    assert_eq!(board.get(1, 1), Some(Cell::Empty));
    assert_eq!(board.get(3, 0), None);
    assert_eq!(board.get(0, -1), None);
}

#[test]
fn test_empty_cells_shrink() {
    let mut board = BoardState::new();
    board.place(1, 1, Player::One).unwrap();
    let empty = board.empty_cells();
    assert_eq!(empty.len(), 8);
    assert!(!empty.contains(&(1, 1)));
}
