//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::types::{Board, GameOutcome, Square};
use tracing::instrument;

/// Checks if the board is full (no square is empty).
///
/// Only meaningful as a draw test once neither player has won; a full board
/// with a completed line is a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Classifies the board: a win takes precedence over a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(winner) = check_winner(board) {
        GameOutcome::Win(winner)
    } else if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_draw() {
        let board = Board::new();
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), GameOutcome::InProgress);
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "....X....".parse().unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_win() {
        // X X X / O O X / X O O
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
    }
}
