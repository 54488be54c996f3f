//! oxo - unified CLI
//!
//! Terminal tic-tac-toe plus one-shot engine queries.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use oxo::{AppConfig, BestMoveReport, EvaluateReport};
use oxo_engine::{Board, Player};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    // The TUI sets up its own file logging.
    if !matches!(command, Command::Play { .. }) {
        initialize_cli_tracing();
    }

    match command {
        Command::Play {
            ai,
            ai_player,
            config,
        } => run_play(ai, ai_player, config).await,
        Command::BestMove {
            board,
            player,
            maximizer,
            json,
        } => run_best_move(board, player, maximizer, json),
        Command::Evaluate { board, json } => run_evaluate(board, json),
    }
}

/// Run the terminal UI
async fn run_play(ai: bool, ai_player: Option<Player>, config: PathBuf) -> Result<()> {
    let config = AppConfig::load_or_default(&config)?.with_overrides(ai, ai_player);
    oxo::run_tui(config).await
}

/// Print the engine's move
#[instrument(skip(board), fields(board = %board))]
fn run_best_move(board: Board, player: Player, maximizer: Player, json: bool) -> Result<()> {
    info!("Searching for best move");

    let report = BestMoveReport::compute(&board, player, maximizer);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n\n{}", board.display(), report.render_text());
    }
    Ok(())
}

/// Print the board evaluation
#[instrument(skip(board), fields(board = %board))]
fn run_evaluate(board: Board, json: bool) -> Result<()> {
    let report = EvaluateReport::compute(&board);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n\n{}", board.display(), report.render_text());
    }
    Ok(())
}

fn initialize_cli_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
