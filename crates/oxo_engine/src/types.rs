//! Core domain types for tic-tac-toe.

use crate::error::{MoveError, ParseError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character mark used in board notation.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}

impl FromStr for Player {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(ParseError::new(format!(
                "Invalid player '{}' (expected X or O)",
                other
            ))),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Parses one notation character. `.`, `_`, `-` and space are empty.
    fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            '.' | '_' | '-' | ' ' => Some(Square::Empty),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(player) => player.mark(),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is `Copy`: search explores continuations on copies, so a
/// board handed to the engine is never changed behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELLS],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; CELLS]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds(index))?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn available_spots(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// The index must come from [`Board::available_spots`].
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut next = *self;
        next.squares[index] = Square::Occupied(player);
        next
    }

    /// Returns the board with X and O swapped.
    pub fn swapped(&self) -> Self {
        let mut squares = self.squares;
        for square in squares.iter_mut() {
            if let Square::Occupied(player) = square {
                *square = Square::Occupied(player.opponent());
            }
        }
        Self { squares }
    }

    /// Nine-character row-major notation, `.` for empty squares.
    pub fn notation(&self) -> String {
        self.squares.iter().map(|square| square.to_char()).collect()
    }

    /// Formats the board as a human-readable grid, numbering empty squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => result.push_str(&(index + 1).to_string()),
                    Square::Occupied(player) => result.push(player.mark()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.notation())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses row-major notation such as `"OO.XX...."`.
    ///
    /// Newlines, tabs and `|` separators are skipped, so `"OO.\nXX.\n..."`
    /// parses too. A plain space counts as an empty square.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; CELLS];
        let mut count = 0;

        for c in s
            .trim_matches(|c: char| c == '\n' || c == '\r')
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '\t' | '|'))
        {
            let square = Square::from_char(c)
                .ok_or_else(|| ParseError::new(format!("Invalid cell character '{}'", c)))?;
            if count < CELLS {
                squares[count] = square;
            }
            count += 1;
        }

        if count != CELLS {
            return Err(ParseError::new(format!(
                "Expected {} cells, found {}",
                CELLS, count
            )));
        }

        Ok(Self { squares })
    }
}

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Win(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game has a winner or is drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(player) => write!(f, "{} Wins!", player),
            GameOutcome::Draw => write!(f, "It's a Draw!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notation() {
        let board: Board = "OO.XX....".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(3), Some(Square::Occupied(Player::X)));
        assert_eq!(board.available_spots(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_multiline() {
        let board: Board = "X|O|.\n.|X|.\n.|.|O\n".parse().unwrap();
        assert_eq!(board.notation(), "XO..X...O");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO".parse::<Board>().is_err());
        assert!("XOXOXOXOXO".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = "XOZ......".parse::<Board>().unwrap_err();
        assert!(err.message.contains('Z'));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(
            board.set(9, Square::Occupied(Player::X)),
            Err(MoveError::OutOfBounds(9))
        );
    }

    #[test]
    fn test_swapped() {
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(board.swapped().notation(), "OX.......");
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parse() {
        assert_eq!("o".parse::<Player>().unwrap(), Player::O);
        assert!("Z".parse::<Player>().is_err());
    }
}
