//! How a finished game ended.

use crate::rules::{GameResult, evaluate_terminal};
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Result of a game that has ended.
///
/// [`GameResult`] minus the ongoing case, so a finished game can never
/// claim to still be in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// The player completed a line.
    #[display("{} wins", _0)]
    Winner(Player),
    /// The board filled with no line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Outcome of `board`, or `None` while it is still in play.
    pub fn of(board: &Board) -> Option<Self> {
        match evaluate_terminal(board) {
            GameResult::Won(player) => Some(Outcome::Winner(player)),
            GameResult::Draw => Some(Outcome::Draw),
            GameResult::Ongoing => None,
        }
    }

    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        GameResult::from(*self).winner()
    }

    /// True for a drawn game.
    pub fn is_draw(&self) -> bool {
        *self == Outcome::Draw
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => GameResult::Won(player),
            Outcome::Draw => GameResult::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_board() {
        assert_eq!(Outcome::of(&Board::new()), None);
        let won: Board = "OOOXX.X..".parse().unwrap();
        assert_eq!(Outcome::of(&won), Some(Outcome::Winner(Player::O)));
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert!(Outcome::of(&drawn).is_some_and(|o| o.is_draw()));
    }

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::Winner(Player::X).winner(), Some(Player::X));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
