//! The nine squares of the board, by name and by index.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A square on the board, numbered 0-8 row by row from the top left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// 0
    TopLeft,
    /// 1
    TopCenter,
    /// 2
    TopRight,
    /// 3
    MiddleLeft,
    /// 4
    Center,
    /// 5
    MiddleRight,
    /// 6
    BottomLeft,
    /// 7
    BottomCenter,
    /// 8
    BottomRight,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// Every square in index order; search order follows this.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index, 0-8.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Square at `index`, or `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row, 0 at the top.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column, 0 at the left.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Human-readable name such as `Top-left`.
    pub fn label(self) -> &'static str {
        LABELS[self.to_index()]
    }

    /// Reads a square typed by a player.
    ///
    /// Accepts an index (`"4"`) or a name. Names ignore case and any
    /// character that is not a letter or digit, so `"top left"`,
    /// `"TOP_LEFT"` and `"top-left"` are the same square.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        let key = squash(s);
        if key.is_empty() {
            return None;
        }
        LABELS
            .iter()
            .position(|label| squash(label) == key)
            .and_then(Self::from_index)
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_iteration_matches_all() {
        assert!(Position::iter().eq(Position::ALL));
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!((Position::TopRight.row(), Position::TopRight.column()), (0, 2));
        assert_eq!((Position::Center.row(), Position::Center.column()), (1, 1));
        assert_eq!(
            (Position::BottomLeft.row(), Position::BottomLeft.column()),
            (2, 0)
        );
    }

    #[test]
    fn test_labels_round_trip_through_parser() {
        for pos in Position::ALL {
            assert_eq!(Position::from_label_or_number(pos.label()), Some(pos));
        }
    }
}
