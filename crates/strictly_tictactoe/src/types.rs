//! Core domain types for tic-tac-toe.

use crate::error::BoardParseError;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (the human side by default).
    #[strum(ascii_case_insensitive)]
    X,
    /// Player O (the solver side by default).
    #[strum(ascii_case_insensitive)]
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
    fn to_char(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | '_' | '-' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board is a plain nine byte value, so search code copies it into
/// each recursive frame instead of placing and undoing marks in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player` placed at `pos`.
    pub fn with(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their position number (0-8) so a player can
    /// type it straight back.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
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

/// Compact nine character form, e.g. `OO.XX....`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            write!(f, "{}", square.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order. `X` and `O` are marks;
    /// `.`, `_` and `-` are empty. Whitespace and the `|` and `/`
    /// separators between cells are ignored, so `"X|O|.\n...\n..."` and
    /// `"XO./.../..."` also parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength { got: cells.len() });
        }

        let mut squares = [Square::Empty; 9];
        for (index, &c) in cells.iter().enumerate() {
            squares[index] = Square::from_char(c)
                .ok_or(BoardParseError::InvalidCharacter { character: c, index })?;
        }
        Ok(Self { squares })
    }
}
