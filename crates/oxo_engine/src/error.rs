//! Error types for moves and board notation.

use crate::types::Player;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// It is the AI's turn, not this player's.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The engine found no empty square to play.
    #[display("No valid moves available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveError {}

/// Error parsing a board or player from text, with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
