//! Command-line interface for oxo.

use clap::{Parser, Subcommand};
use oxo_engine::{Board, Player};
use std::path::PathBuf;

/// oxo - tic-tac-toe against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe with an unbeatable minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Start with the AI opponent switched on
        #[arg(long)]
        ai: bool,

        /// Mark the AI plays (X or O)
        #[arg(long)]
        ai_player: Option<Player>,

        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "oxo.toml")]
        config: PathBuf,
    },

    /// Print the engine's move for a board
    BestMove {
        /// Board in row-major notation, e.g. "OO.XX...."
        #[arg(short, long)]
        board: Board,

        /// Side to move
        #[arg(short, long, default_value = "O")]
        player: Player,

        /// Side the engine maximizes for
        #[arg(long, default_value = "O")]
        maximizer: Player,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the win/draw evaluation of a board
    Evaluate {
        /// Board in row-major notation, e.g. "XXXOO...."
        #[arg(short, long)]
        board: Board,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            ai: false,
            ai_player: None,
            config: PathBuf::from("oxo.toml"),
        }
    }
}
