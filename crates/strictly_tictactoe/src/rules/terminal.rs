//! Terminal-state classification.

use super::lines::check_winner;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Classification of a board.
///
/// Exactly one variant applies to any board: a winner takes precedence,
/// then a full board is a draw, otherwise play continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    /// No line is won and at least one square is empty.
    #[display("ongoing")]
    Ongoing,
    /// No line is won and the board is full.
    #[display("draw")]
    Draw,
    /// The player owns a complete line.
    #[display("{} wins", _0)]
    Won(Player),
}

impl GameResult {
    /// True for any result other than [`GameResult::Ongoing`].
    pub fn is_terminal(self) -> bool {
        self != GameResult::Ongoing
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// True when no square is empty.
pub fn is_full(board: &Board) -> bool {
    board.empty_count() == 0
}

/// A full board that nobody has won.
pub fn is_draw(board: &Board) -> bool {
    evaluate_terminal(board) == GameResult::Draw
}

/// Classifies a board as won, drawn or still in play.
///
/// Pure and total: callable on any board, including the empty board
/// (`Ongoing`) and full boards (`Draw` or a winner, never both).
pub fn evaluate_terminal(board: &Board) -> GameResult {
    if let Some(winner) = check_winner(board) {
        GameResult::Won(winner)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate_terminal(&Board::new()), GameResult::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), GameResult::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board: Board = "XXXOOXOXO".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), GameResult::Won(Player::X));
    }

    #[test]
    fn test_win_with_empty_squares() {
        let board: Board = "O..XO.X.O".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), GameResult::Won(Player::O));
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), GameResult::Ongoing);
        assert!(!evaluate_terminal(&board).is_terminal());
    }

    #[test]
    fn test_draw_helpers() {
        let full_draw: Board = "XOXXOOOXX".parse().unwrap();
        let full_win: Board = "XXXOOXOXO".parse().unwrap();
        assert!(is_full(&full_draw) && is_draw(&full_draw));
        assert!(is_full(&full_win) && !is_draw(&full_win));
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_result_display() {
        assert_eq!(GameResult::Won(Player::O).to_string(), "O wins");
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }
}
