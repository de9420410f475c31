//! The eight winning lines and who owns them.

use crate::{Board, Player, Position, Square};

const fn line(a: usize, b: usize, c: usize) -> [Position; 3] {
    [Position::ALL[a], Position::ALL[b], Position::ALL[c]]
}

/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    line(0, 1, 2),
    line(3, 4, 5),
    line(6, 7, 8),
    line(0, 3, 6),
    line(1, 4, 7),
    line(2, 5, 8),
    line(0, 4, 8),
    line(2, 4, 6),
];

/// The mark filling all three squares of `line`, if any.
pub fn line_owner(board: &Board, line: [Position; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|pos| board.get(pos));
    match a {
        Square::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

/// First owned line in [`LINES`] order, with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES
        .into_iter()
        .find_map(|line| line_owner(board, line).map(|player| (player, line)))
}

/// Owner of any complete line.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
