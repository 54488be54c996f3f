//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use oxo_engine::{Game, Position};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Time is passed in explicitly so AI pacing can be driven by tests.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    ai_delay: Duration,
    ai_due: Option<Instant>,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument(skip(config))]
    pub fn new(config: &AppConfig, now: Instant) -> Self {
        let mut app = Self {
            game: Game::with_ai(*config.ai_player(), *config.ai_enabled()),
            cursor: Position::Center,
            ai_delay: config.ai_delay(),
            ai_due: None,
            message: None,
            should_quit: false,
        };
        app.schedule_ai(now);
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Last error or notice to show under the board.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True while an AI move is waiting for its delay to pass.
    pub fn ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line: whose turn, or the result.
    pub fn status_line(&self) -> String {
        if self.ai_pending() {
            format!("{} (AI is thinking...)", self.game.status_text())
        } else {
            self.game.status_text()
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.game.reset();
                self.after_reset(now);
            }
            KeyCode::Char('m') => {
                self.game.toggle_mode();
                self.after_reset(now);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor, now),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos, now);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Plays the AI move once its delay has passed.
    ///
    /// Returns true if a move was made.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.ai_due {
            Some(due) if now >= due => {
                self.ai_due = None;
                match self.game.ai_move() {
                    Ok(index) => {
                        debug!(index, "AI moved");
                        self.message = None;
                        true
                    }
                    Err(e) => {
                        warn!(error = %e, "AI move failed");
                        self.message = Some(e.to_string());
                        false
                    }
                }
            }
            _ => false,
        }
    }

    fn place(&mut self, pos: Position, now: Instant) {
        match self.game.play(pos.to_index()) {
            Ok(_) => {
                debug!(position = %pos, "Move applied");
                self.message = None;
                self.schedule_ai(now);
            }
            Err(e) => {
                debug!(position = %pos, error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn after_reset(&mut self, now: Instant) {
        self.ai_due = None;
        self.message = None;
        self.cursor = Position::Center;
        self.schedule_ai(now);
    }

    fn schedule_ai(&mut self, now: Instant) {
        if self.game.needs_ai_move() && self.ai_due.is_none() {
            self.ai_due = Some(now + self.ai_delay);
        }
    }
}
