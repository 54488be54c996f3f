//! Game session state for tic-tac-toe.
//!
//! [`Game`] owns the authoritative board, whose turn it is, and whether the
//! AI opponent is switched on. Front-ends hold one `Game` and route every
//! human click or key press through [`Game::play`]; AI turns go through
//! [`Game::ai_move`], which hands the engine a snapshot of the board and
//! applies the returned index through the same move path.

use crate::error::MoveError;
use crate::rules::outcome;
use crate::search::Minimax;
use crate::types::{Board, CELLS, GameOutcome, Player, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameOutcome,
    ai_enabled: bool,
    engine: Minimax,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game. X moves first; `ai_player` is the mark the AI
    /// plays once AI mode is switched on.
    #[instrument]
    pub fn new(ai_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameOutcome::InProgress,
            ai_enabled: false,
            engine: Minimax::new(ai_player),
            history: Vec::new(),
        }
    }

    /// Creates a new game with AI mode already set.
    pub fn with_ai(ai_player: Player, ai_enabled: bool) -> Self {
        let mut game = Self::new(ai_player);
        game.ai_enabled = ai_enabled;
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the winner, once the game is won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameOutcome {
        self.status
    }

    /// Returns true while moves can still be made.
    pub fn is_active(&self) -> bool {
        !self.status.is_over()
    }

    /// Returns true if the AI opponent is switched on.
    pub fn ai_enabled(&self) -> bool {
        self.ai_enabled
    }

    /// The mark the AI plays.
    pub fn ai_player(&self) -> Player {
        self.engine.maximizer()
    }

    /// Cell indices in the order they were played.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// True when the AI should move next.
    pub fn needs_ai_move(&self) -> bool {
        self.ai_enabled && self.is_active() && self.current_player == self.ai_player()
    }

    /// Makes a human move at `index` (0-8).
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::OutOfBounds`] for an index outside 0-8
    /// - [`MoveError::SquareOccupied`] if the square is taken
    /// - [`MoveError::NotYourTurn`] if AI mode is on and the AI is to move
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if index >= CELLS {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }
        if self.needs_ai_move() {
            return Err(MoveError::NotYourTurn(self.current_player));
        }

        self.apply(index)
    }

    /// Lets the engine choose and play a move for the player to move.
    ///
    /// Returns the index that was played.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn ai_move(&mut self) -> Result<usize, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }

        let snapshot = self.board;
        let best = self.engine.best_move(&snapshot, self.current_player);
        let index = best.index.ok_or(MoveError::NoMoveAvailable)?;
        debug!(index, score = best.score, "AI chose position");

        self.apply(index)?;
        Ok(index)
    }

    fn apply(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        let player = self.current_player;
        self.board.set(index, Square::Occupied(player))?;
        self.history.push(index);
        self.status = outcome(&self.board);

        match self.status {
            GameOutcome::InProgress => self.current_player = player.opponent(),
            GameOutcome::Win(winner) => info!(%winner, "Game won"),
            GameOutcome::Draw => info!("Game drawn"),
        }

        Ok(self.status)
    }

    /// Clears the board and gives X the first move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = GameOutcome::InProgress;
        self.history.clear();
    }

    /// Switches between two-player and AI mode, then resets.
    #[instrument(skip(self), fields(ai_enabled = self.ai_enabled))]
    pub fn toggle_mode(&mut self) {
        self.ai_enabled = !self.ai_enabled;
        info!(ai_enabled = self.ai_enabled, "Mode toggled");
        self.reset();
    }

    /// Status line shown to the players.
    pub fn status_text(&self) -> String {
        match self.status {
            GameOutcome::InProgress => format!("Player {}'s turn", self.current_player),
            other => other.to_string(),
        }
    }

    /// Label for the mode switch, naming the mode it switches to.
    pub fn mode_label(&self) -> &'static str {
        if self.ai_enabled {
            "Switch to User vs User"
        } else {
            "Switch to AI Opponent"
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Player::O)
    }
}
