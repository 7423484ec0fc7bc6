//! Noughts - terminal driver
//!
//! Thin orchestration over the library: config, logging, then a session.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Game, NoughtsConfig, TerminalSession, parse_moves};
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = NoughtsConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play { quiet: true } => run_play(config.with_show_board(false)),
        Command::Play { quiet: false } => run_play(config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Logs go to stderr so they never mix with the board on stdout.
fn init_tracing(config: &NoughtsConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_level().as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Play an interactive game on stdin/stdout.
fn run_play(config: NoughtsConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = TerminalSession::new(stdin.lock(), stdout.lock(), &config);
    let outcome = session.run()?;
    info!(%outcome, "Session ended");
    Ok(())
}

/// Replay moves given on the command line.
fn run_replay(moves: &[String], json: bool) -> Result<()> {
    let moves = parse_moves(moves)?;
    let game = Game::replay(&moves).context("Replay failed")?;

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &game)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", game.board())?;
        writeln!(out, "{}", game.outcome())?;
    }
    Ok(())
}
