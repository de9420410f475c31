//! Solver configuration.

use crate::Player;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// How the solver walks the game tree.
///
/// Both strategies choose exactly the same moves; pruning only skips
/// branches that cannot change the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchStrategy {
    /// Visit every node of the remaining tree.
    #[default]
    Exhaustive,
    /// Fail-soft alpha-beta pruning.
    AlphaBeta,
}

/// Shortcut taken before searching in the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Opening {
    /// Take the center when the board is empty.
    #[default]
    CenterWhenEmpty,
    /// Take the center whenever it is free and at most one mark has been
    /// placed, i.e. also as the reply to the opponent's first move.
    CenterWhenUntouched,
}

/// Configuration for [`Solver`](crate::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SolverConfig {
    /// The mark the solver plays (the maximizing side).
    mark: Player,
    /// Tree walk strategy.
    search: SearchStrategy,
    /// Opening shortcut.
    opening: Opening,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            mark: Player::O,
            search: SearchStrategy::default(),
            opening: Opening::default(),
        }
    }
}
