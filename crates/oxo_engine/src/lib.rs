//! Tic-tac-toe rules and an unbeatable minimax opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **Search**: exhaustive [`Minimax`] search returning a [`ScoredMove`]
//! - **Game**: a [`Game`] session owning the board, turn and AI mode
//!
//! # Example
//!
//! ```
//! use oxo_engine::{Board, Player, minimax};
//!
//! let board: Board = "OO.XX....".parse().unwrap();
//! let best = minimax(&board, Player::O);
//! assert_eq!(best.index, Some(2));
//! assert_eq!(best.score, 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod types;

pub use error::{MoveError, ParseError};
pub use game::Game;
pub use position::Position;
pub use rules::{WIN_COMBOS, check_winner, evaluate, is_draw, outcome};
pub use search::{DRAW_SCORE, LOSS_SCORE, Minimax, ScoredMove, WIN_SCORE, minimax};
pub use types::{Board, CELLS, GameOutcome, Player, Square};
