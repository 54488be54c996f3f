//! Scenario tests for the minimax engine.

mod common;

use common::board;
use oxo_engine::{
    Board, DRAW_SCORE, GameOutcome, LOSS_SCORE, Minimax, Player, WIN_SCORE, minimax,
};

#[test]
fn test_empty_board_is_a_draw() {
    let result = minimax(&Board::new(), Player::O);
    assert_eq!(result.score, DRAW_SCORE);
    assert!(result.index.is_some());
}

#[test]
fn test_empty_board_choice_is_deterministic() {
    let first = minimax(&Board::new(), Player::O);
    let second = minimax(&Board::new(), Player::O);
    assert_eq!(first, second);
    // Every opening draws, and the first maximum is kept.
    assert_eq!(first.index, Some(0));
}

#[test]
fn test_forced_win_completes_top_row() {
    let result = minimax(&board("OO.XX...."), Player::O);
    assert_eq!(result.index, Some(2));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_forced_block() {
    // O must block at 2, but X then takes the centre and threatens both 7
    // and 8, so the block still loses.
    let result = minimax(&board("XX.O....."), Player::O);
    assert_eq!(result.index, Some(2));
    assert_eq!(result.score, LOSS_SCORE);
}

#[test]
fn test_lost_position_still_returns_a_move() {
    // X . X / . O . / X . O with O to move: X threatens both 1 and 3 and O
    // has no immediate win, so every candidate loses and the first is kept.
    let result = minimax(&board("X.X.O.X.O"), Player::O);
    assert_eq!(result.score, LOSS_SCORE);
    assert_eq!(result.index, Some(1));
}

#[test]
fn test_win_preferred_over_block() {
    // X X . / X O . / O . . with O to move: 2 both blocks X and completes
    // O's anti-diagonal.
    let result = minimax(&board("XX.XO.O.."), Player::O);
    assert_eq!(result.index, Some(2));
    assert_eq!(result.score, WIN_SCORE);
}

#[test]
fn test_search_leaves_board_untouched() {
    let before = board("X...O...X");
    let copy = before;
    let _ = minimax(&before, Player::O);
    assert_eq!(before, copy);
}

#[test]
fn test_x_maximizer_mirrors_default_engine() {
    let position = board("XX.O.....");
    let default = minimax(&position, Player::O);
    let mirrored = Minimax::new(Player::X).best_move(&position.swapped(), Player::X);
    assert_eq!(default, mirrored);
}

#[test]
fn test_self_play_is_a_draw() {
    let mut game = oxo_engine::Game::with_ai(Player::O, true);
    while game.is_active() {
        game.ai_move().expect("active game has a move");
    }
    assert_eq!(game.status(), GameOutcome::Draw);
    assert_eq!(game.history().len(), 9);
}
