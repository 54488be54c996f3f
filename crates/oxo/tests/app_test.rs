//! Tests for key handling and AI pacing in the terminal app.

use crossterm::event::KeyCode;
use oxo::{App, AppConfig};
use oxo_engine::{GameOutcome, Player, Position, Square};
use std::io::Write;
use std::time::{Duration, Instant};

fn ai_config(ai_player: &str) -> AppConfig {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "ai_enabled = true").unwrap();
    writeln!(file, "ai_player = \"{}\"", ai_player).unwrap();
    writeln!(file, "ai_delay_ms = 400").unwrap();
    AppConfig::from_file(file.path()).unwrap()
}

#[test]
fn test_cursor_and_enter_place_mark() {
    let now = Instant::now();
    let mut app = App::new(&AppConfig::default(), now);
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(KeyCode::Up, now);
    app.handle_key(KeyCode::Left, now);
    app.handle_key(KeyCode::Enter, now);

    assert_eq!(
        app.game().board().get(0),
        Some(Square::Occupied(Player::X))
    );
    assert_eq!(app.game().current_player(), Player::O);
}

#[test]
fn test_occupied_square_shows_message() {
    let now = Instant::now();
    let mut app = App::new(&AppConfig::default(), now);
    app.handle_key(KeyCode::Char('5'), now);
    app.handle_key(KeyCode::Char('5'), now);
    assert_eq!(app.message(), Some("Square 4 is already occupied"));
}

#[test]
fn test_ai_waits_for_delay() {
    let now = Instant::now();
    let mut app = App::new(&ai_config("O"), now);
    app.handle_key(KeyCode::Char('1'), now);
    assert!(app.ai_pending());

    assert!(!app.tick(now + Duration::from_millis(100)));
    assert_eq!(app.game().current_player(), Player::O);

    // Human input is refused while the AI is due.
    app.handle_key(KeyCode::Char('2'), now);
    assert!(app.game().board().is_empty(1));

    assert!(app.tick(now + Duration::from_millis(400)));
    assert!(!app.ai_pending());
    assert_eq!(app.game().board().get(4), Some(Square::Occupied(Player::O)));
    assert_eq!(app.game().current_player(), Player::X);
}

#[test]
fn test_ai_playing_x_opens_after_delay() {
    let now = Instant::now();
    let mut app = App::new(&ai_config("X"), now);
    assert!(app.ai_pending());
    assert!(app.tick(now + Duration::from_millis(400)));
    assert_eq!(app.game().history().len(), 1);
    assert_eq!(app.game().current_player(), Player::O);
}

#[test]
fn test_toggle_mode_and_reset() {
    let now = Instant::now();
    let mut app = App::new(&AppConfig::default(), now);
    app.handle_key(KeyCode::Char('5'), now);

    app.handle_key(KeyCode::Char('m'), now);
    assert!(app.game().ai_enabled());
    assert!(app.game().history().is_empty());
    assert!(!app.ai_pending());

    app.handle_key(KeyCode::Char('9'), now);
    app.handle_key(KeyCode::Char('r'), now);
    assert!(app.game().history().is_empty());
    assert!(!app.ai_pending());
    assert!(app.game().ai_enabled());
}

#[test]
fn test_game_to_completion_against_ai() {
    let mut now = Instant::now();
    let mut app = App::new(&ai_config("O"), now);

    while app.game().is_active() {
        if app.ai_pending() {
            now += Duration::from_millis(400);
            app.tick(now);
            continue;
        }
        let spot = app.game().board().available_spots()[0];
        app.handle_key(KeyCode::Char(char::from(b'1' + spot as u8)), now);
    }

    assert_ne!(app.game().status(), GameOutcome::Win(Player::X));
    assert!(!app.status_line().contains("turn"));
}

#[test]
fn test_quit() {
    let now = Instant::now();
    let mut app = App::new(&AppConfig::default(), now);
    assert!(!app.should_quit());
    app.handle_key(KeyCode::Char('q'), now);
    assert!(app.should_quit());
}
