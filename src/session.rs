//! Line-based terminal session driving a single game.
//!
//! The session owns one [`Game`], prompts the current player, reads
//! `x y` coordinates and re-prompts until the game reaches a terminal
//! outcome or input runs out.

use crate::config::NoughtsConfig;
use crate::games::tictactoe::{Game, GameOutcome, Move, Player};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Parses a coordinate pair such as `1 2`, `1,2` or `0.7, 2.3`.
///
/// Decimal input is truncated toward zero, matching how a pointer
/// position inside a cell maps to that cell's grid index. Returns `None`
/// unless exactly two finite numbers are given.
pub fn parse_coordinates(input: &str) -> Option<(i64, i64)> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let mut next = || -> Option<i64> {
        let value: f64 = parts.next()?.parse().ok()?;
        value.is_finite().then(|| value.trunc() as i64)
    };

    let x = next()?;
    let y = next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Parses `x,y` tokens into alternating moves starting with player one.
pub fn parse_moves<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Move>> {
    let mut player = Player::One;
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let (x, y) = parse_coordinates(token)
                .with_context(|| format!("Invalid move '{}', expected x,y", token))?;
            let mov = Move::new(player, x, y);
            player = player.opponent();
            Ok(mov)
        })
        .collect()
}

/// Interactive session over arbitrary reader/writer pairs.
pub struct TerminalSession<R, W> {
    game: Game,
    input: R,
    output: W,
    show_board: bool,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    /// Creates a session with a fresh game.
    pub fn new(input: R, output: W, config: &NoughtsConfig) -> Self {
        Self {
            game: Game::new(),
            input,
            output,
            show_board: *config.show_board(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until the game ends or input is exhausted.
    ///
    /// Returns the outcome at that point; `InProgress` means the players
    /// abandoned the game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameOutcome> {
        info!("Starting game");

        while !self.game.is_over() {
            writeln!(self.output, "{}", self.game.to_move().prompt())?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line).context("Failed to read move")? == 0 {
                warn!(moves = self.game.history().len(), "Input closed, abandoning game");
                return Ok(self.game.outcome());
            }

            let Some((x, y)) = parse_coordinates(&line) else {
                debug!(input = %line.trim(), "Unparseable move");
                writeln!(self.output, "Enter a move as: x y")?;
                continue;
            };

            match self.game.play(x, y) {
                Ok(_) => {
                    if self.show_board {
                        writeln!(self.output, "{}", self.game.board())?;
                    }
                }
                Err(e) if e.is_invalid_move() => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }

        let outcome = self.game.outcome();
        writeln!(self.output, "{}", outcome)?;
        Ok(outcome)
    }
}
