//! A placed mark and the ways placing one can fail.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// One ply: `player` puts a mark on `position`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{} at {}", player, position)]
pub struct Move {
    /// Who moves.
    pub player: Player,
    /// Where the mark goes.
    pub position: Position,
}

/// A move the game refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Target square already holds a mark.
    #[display("{} is already taken", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The mover is not the side to move.
    #[display("It is not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// A post-move state check failed; names the broken invariants.
    #[display("Game state check failed: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let m = Move::new(Player::O, Position::BottomCenter);
        assert_eq!(m.to_string(), "O at Bottom-center");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::SquareOccupied(Position::Center).to_string(),
            "Center is already taken"
        );
        assert_eq!(
            MoveError::WrongPlayer(Player::X).to_string(),
            "It is not X's turn"
        );
    }
}
