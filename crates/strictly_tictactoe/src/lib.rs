//! Pure tic-tac-toe game logic and a perfect-play solver.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: line table, winner and draw detection, [`evaluate_terminal`]
//! - **Solver**: exhaustive minimax with depth-biased scoring ([`Solver`])
//! - **Lifecycle**: typestate phases [`GameSetup`] -> [`GameInProgress`] ->
//!   [`GameFinished`], guarded by move contracts and invariants
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, GameResult, Player, Position, Solver, evaluate_terminal};
//!
//! let board: Board = "XX..O....".parse()?;
//! assert_eq!(evaluate_terminal(&board), GameResult::Ongoing);
//!
//! let solver = Solver::playing(Player::O);
//! assert_eq!(solver.choose_move(&board)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod solver;
mod typestate;
mod types;

pub use action::{Move, MoveError};
pub use config::{Opening, SearchStrategy, SolverConfig};
pub use contracts::{Contract, PlaceMark};
pub use error::{BoardParseError, InvalidStateError};
pub use invariants::{
    BoardMatchesHistory, GameInvariants, Invariant, InvariantSet, InvariantViolation, TurnOrder,
    Undecided,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{GameResult, LINES, evaluate_terminal};
pub use solver::{MoveScore, SearchStats, Solver, WIN_SCORE};
pub use typestate::{GameFinished, GameInProgress, GameSetup, Transition};
pub use types::{Board, Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;
