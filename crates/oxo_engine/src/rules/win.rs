//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The eight winning lines: three rows, three columns, two diagonals.
pub const WIN_COMBOS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns true if `player` occupies every square of at least one line.
pub fn evaluate(board: &Board, player: Player) -> bool {
    let target = Square::Occupied(player);
    WIN_COMBOS
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(target)))
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WIN_COMBOS`] order and the first complete one
/// decides, so on a board where both players own a line the answer is
/// whichever line comes first.
#[instrument(skip(board), fields(board = %board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WIN_COMBOS {
        let sq = board.get(a);
        if sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Some(Square::Occupied(player)) => Some(player),
                _ => None,
            };
        }
    }

    None
}
