//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The solver and the game
//! lifecycle both classify boards through [`evaluate_terminal`].

pub mod lines;
pub mod terminal;

pub use lines::{LINES, check_winner, line_owner, winning_line};
pub use terminal::{GameResult, evaluate_terminal, is_draw, is_full};
