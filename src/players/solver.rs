//! Solver-backed player.

use super::{Player, Turn};
use crate::session::ArenaSession;
use anyhow::Result;
use std::time::Duration;
use strictly_tictactoe::Solver;
use tracing::{debug, instrument};

/// Plays the solver's move after a short pause.
pub struct SolverPlayer {
    name: String,
    solver: Solver,
    think_delay: Duration,
}

impl SolverPlayer {
    /// Creates a solver player.
    pub fn new(name: impl Into<String>, solver: Solver, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            solver,
            think_delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for SolverPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    async fn get_move(&mut self, session: &ArenaSession) -> Result<Turn> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let (position, stats) = self.solver.choose_move_with_stats(session.board())?;
        debug!(%position, nodes = stats.nodes(), "Solver chose position");
        Ok(Turn::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
