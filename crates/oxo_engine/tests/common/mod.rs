//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use oxo_engine::{Board, GameOutcome, Player, Square, outcome};
use proptest::prelude::*;

/// Parses board notation, panicking on malformed test input.
pub fn board(notation: &str) -> Board {
    notation.parse().expect("valid board notation")
}

/// Plays `order` as alternating moves from the empty board (X first),
/// stopping after `len` moves or as soon as the game is decided.
///
/// Returns the board and the player to move next.
pub fn play_out(order: &[usize], len: usize) -> (Board, Player) {
    let mut board = Board::new();
    let mut player = Player::X;

    for &index in order.iter().take(len) {
        if outcome(&board) != GameOutcome::InProgress {
            break;
        }
        board
            .set(index, Square::Occupied(player))
            .expect("index in range");
        player = player.opponent();
    }

    (board, player)
}

/// A random permutation of the nine cells.
pub fn move_order() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

/// A board reachable through legal alternating play, with the player to move.
pub fn reachable_position(min_moves: usize) -> impl Strategy<Value = (Board, Player)> {
    (move_order(), min_moves..=9).prop_map(|(order, len)| play_out(&order, len))
}
