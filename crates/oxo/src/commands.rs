//! One-shot commands that query the engine without starting the UI.

use oxo_engine::{Board, GameOutcome, Minimax, Player, ScoredMove, evaluate, is_draw, outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of asking the engine for a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMoveReport {
    /// Board in row-major notation.
    pub board: String,
    /// Side to move.
    pub player: Player,
    /// Side the scores are reported for.
    pub maximizer: Player,
    /// Chosen cell, absent on a finished board.
    pub index: Option<usize>,
    /// Score of the chosen cell for the maximizer.
    pub score: i32,
}

impl BestMoveReport {
    /// Runs the search for `player` with the given maximizing side.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &Board, player: Player, maximizer: Player) -> Self {
        let ScoredMove { index, score } = Minimax::new(maximizer).best_move(board, player);
        Self {
            board: board.notation(),
            player,
            maximizer,
            index,
            score,
        }
    }

    /// Plain-text rendering for the terminal.
    pub fn render_text(&self) -> String {
        match self.index {
            Some(index) => format!(
                "Best move for {}: {} (score {} for {})",
                self.player, index, self.score, self.maximizer
            ),
            None => format!(
                "No move for {}: game is over (score {} for {})",
                self.player, self.score, self.maximizer
            ),
        }
    }
}

/// Win/draw evaluation of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateReport {
    /// Board in row-major notation.
    pub board: String,
    /// Overall outcome.
    pub outcome: GameOutcome,
    /// X owns a full line.
    pub x_wins: bool,
    /// O owns a full line.
    pub o_wins: bool,
    /// No square is empty.
    pub full: bool,
}

impl EvaluateReport {
    /// Evaluates `board`.
    #[instrument(skip(board), fields(board = %board))]
    pub fn compute(board: &Board) -> Self {
        Self {
            board: board.notation(),
            outcome: outcome(board),
            x_wins: evaluate(board, Player::X),
            o_wins: evaluate(board, Player::O),
            full: is_draw(board),
        }
    }

    /// Plain-text rendering for the terminal.
    pub fn render_text(&self) -> String {
        match self.outcome {
            GameOutcome::InProgress => "Game in progress".to_string(),
            other => other.to_string(),
        }
    }
}
