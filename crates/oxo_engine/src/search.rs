//! Exhaustive minimax search.
//!
//! The engine enumerates the whole remaining game tree. On a 3x3 board
//! that is at most 549,946 positions from the empty board, so no pruning,
//! memoisation or depth limit is used.
//!
//! Scores are fixed at [`WIN_SCORE`], [`DRAW_SCORE`] and [`LOSS_SCORE`]
//! from the maximizer's point of view and carry no depth penalty: the
//! engine does not prefer a quick win over a slow one.

use crate::rules::{evaluate, is_draw};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the maximizer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Score of a position the maximizer has lost.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// A candidate move and the score it leads to under perfect play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell to play, or `None` when the position is already terminal.
    pub index: Option<usize>,
    /// Score from the maximizer's perspective.
    pub score: i32,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

impl std::fmt::Display for ScoredMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "index {} (score {})", index, self.score),
            None => write!(f, "no move (score {})", self.score),
        }
    }
}

/// Minimax search engine with a configurable maximizing side.
///
/// The default engine maximizes for O and minimizes for X.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Player,
}

impl Minimax {
    /// Creates an engine that scores positions for `maximizer`.
    pub fn new(maximizer: Player) -> Self {
        Self { maximizer }
    }

    /// The side whose wins score [`WIN_SCORE`].
    pub fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// The side whose wins score [`LOSS_SCORE`].
    pub fn minimizer(&self) -> Player {
        self.maximizer.opponent()
    }

    /// Finds the best move for `player` on `board`.
    ///
    /// Candidates are tried in ascending index order; the first strict
    /// improvement is kept, so ties resolve to the lowest index. Terminal
    /// positions (either side has a line, or the board is full) return
    /// `index: None`.
    #[instrument(skip(self, board), fields(board = %board, maximizer = %self.maximizer))]
    pub fn best_move(&self, board: &Board, player: Player) -> ScoredMove {
        let mut nodes = 0u64;
        let best = self.search(board, player, &mut nodes);
        debug!(index = ?best.index, score = best.score, nodes, "Search complete");
        best
    }

    fn search(&self, board: &Board, player: Player, nodes: &mut u64) -> ScoredMove {
        *nodes += 1;

        let spots = board.available_spots();

        if evaluate(board, self.minimizer()) {
            return ScoredMove::terminal(LOSS_SCORE);
        } else if evaluate(board, self.maximizer) {
            return ScoredMove::terminal(WIN_SCORE);
        } else if spots.is_empty() {
            return ScoredMove::terminal(DRAW_SCORE);
        }

        let maximizing = player == self.maximizer;
        let mut best: Option<ScoredMove> = None;

        for index in spots {
            let next = board.with_mark(index, player);
            let score = self.search(&next, player.opponent(), nodes).score;

            let improves = match best {
                None => true,
                Some(current) if maximizing => score > current.score,
                Some(current) => score < current.score,
            };
            if improves {
                best = Some(ScoredMove {
                    index: Some(index),
                    score,
                });
            }
        }

        // `spots` was non-empty, so at least one candidate was recorded.
        best.unwrap_or(ScoredMove::terminal(DRAW_SCORE))
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

/// Best move for `player` with O as the maximizing side.
pub fn minimax(board: &Board, player: Player) -> ScoredMove {
    Minimax::default().best_move(board, player)
}
