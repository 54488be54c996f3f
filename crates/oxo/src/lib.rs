//! Terminal tic-tac-toe against an unbeatable minimax opponent.
//!
//! The game rules and the search engine live in [`oxo_engine`]; this crate
//! adds configuration, one-shot engine queries and the ratatui front-end.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod commands;
mod config;
mod tui;

pub use commands::{BestMoveReport, EvaluateReport};
pub use config::{AppConfig, ConfigError};
pub use tui::{App, run_tui};
