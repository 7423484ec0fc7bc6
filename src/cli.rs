//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game, reading "x y" moves from stdin
    Play {
        /// Do not print the board after each move
        #[arg(long)]
        quiet: bool,
    },

    /// Apply a list of moves and print the resulting board and outcome
    Replay {
        /// Moves as x,y in play order, player one first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print the final game as JSON
        #[arg(long)]
        json: bool,
    },
}
