//! Noughts - two-player tic-tac-toe
//!
//! The core is the 3x3 board model and the win/draw rules. A small
//! terminal driver sits on top for playing from the command line.
//!
//! # Architecture
//!
//! - **Board**: [`BoardState`] owns the grid and the single mutation, [`BoardState::place`]
//! - **Rules**: pure evaluation in [`rules`] (rows, columns, diagonals, draw, verdict)
//! - **Game**: [`Game`] tracks turns, history and the outcome state machine
//! - **Session**: [`TerminalSession`] reads moves from any `BufRead`
//!
//! # Example
//!
//! ```
//! use noughts::{BoardState, GameOutcome, Player, rules};
//!
//! let mut board = BoardState::new();
//! for x in 0..3 {
//!     board.place(x, 0, Player::One)?;
//! }
//! assert_eq!(rules::evaluate(&board, Player::One), GameOutcome::Win(Player::One));
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, NoughtsConfig};

// Crate-level exports - Terminal session
pub use session::{TerminalSession, parse_coordinates, parse_moves};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BoardState, Cell, Game, GameOutcome, Move, MoveError, Player, SIZE, invariants, rules,
};
