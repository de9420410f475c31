//! Error types for board parsing and the solver.

use crate::rules::GameResult;

/// The solver was asked to move in a position where no move exists.
///
/// This always points at the calling game loop: it should check
/// [`evaluate_terminal`](crate::evaluate_terminal) before asking for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidStateError {
    /// The game on the board is already decided.
    #[display("Cannot choose a move: game is already over ({})", _0)]
    Finished(#[error(not(source))] GameResult),

    /// Search reached an undecided board with nowhere left to play.
    #[display("Board is undecided but has no empty squares")]
    NoEmptySquares,
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Input did not contain exactly nine cells.
    #[display("Expected 9 cells, got {}", got)]
    WrongLength {
        /// Number of cells found.
        got: usize,
    },

    /// Input contained a character that is not a mark or an empty cell.
    #[display("Invalid character '{}' at cell {}", character, index)]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Cell index (0-8) where it appeared.
        index: usize,
    },
}
