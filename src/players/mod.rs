//! Player trait and implementations.

mod human;
mod solver;

pub use human::HumanPlayer;
pub use solver::SolverPlayer;

use crate::session::ArenaSession;
use anyhow::Result;
use strictly_tictactoe::Position;

/// What a player wants to do on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Place a mark.
    Place(Position),
    /// Input that names no square; the player is asked again.
    Unrecognized(String),
    /// Leave the match.
    Quit,
}

/// Trait for players that can take a seat in the arena.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next action for the current session.
    async fn get_move(&mut self, session: &ArenaSession) -> Result<Turn>;

    /// Asked after each finished game.
    async fn wants_rematch(&mut self, _session: &ArenaSession) -> Result<bool> {
        Ok(true)
    }

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
