//! Match orchestration between the human seat and the solver seat.

use crate::players::{Player, Turn};
use crate::session::{ArenaSession, SessionError, SessionStatus, Tally};
use anyhow::Result;
use strictly_tictactoe::{Board, Mark, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began.
    GameStarted {
        /// One-based game number within the match.
        number: u32,
        /// Mark that opens the game.
        first: Mark,
    },
    /// The human seat is asked for a square.
    AwaitingMove {
        /// Seat name.
        player: String,
        /// Mark the seat plays.
        mark: Mark,
        /// Board to choose on.
        board: Board,
    },
    /// The solver seat is thinking.
    Thinking {
        /// Seat name.
        player: String,
    },
    /// A mark was placed.
    MoveMade {
        /// Seat name.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
        /// Board after the placement.
        board: Board,
    },
    /// Input was refused and the same seat is asked again.
    Rejected {
        /// Why the input was refused.
        reason: String,
    },
    /// The game ended.
    GameOver {
        /// Final status.
        status: SessionStatus,
        /// Score including this game.
        tally: Tally,
        /// Final board.
        board: Board,
    },
    /// The human seat is asked whether to play again.
    RematchOffered,
}

/// Runs games between two seats over one [`ArenaSession`].
pub struct Orchestrator {
    session: ArenaSession,
    human: Box<dyn Player>,
    solver: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: ArenaSession,
        human: Box<dyn Player>,
        solver: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            human,
            solver,
            event_tx,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &ArenaSession {
        &self.session
    }

    /// Plays one game from the current board.
    ///
    /// Returns `None` when a seat quits before the game ends.
    #[instrument(skip(self))]
    pub async fn play_game(&mut self) -> Result<Option<SessionStatus>> {
        let number = self.session.tally().games() + 1;
        if let Some(first) = self.session.to_move() {
            info!(number, %first, "Starting game");
            self.event_tx.send(GameEvent::GameStarted { number, first })?;
        }

        loop {
            let status = self.session.status();
            if status.is_over() {
                self.event_tx.send(GameEvent::GameOver {
                    status,
                    tally: *self.session.tally(),
                    board: *self.session.board(),
                })?;
                return Ok(Some(status));
            }

            let Some(mark) = self.session.to_move() else {
                return Ok(Some(status));
            };
            let solver_turn = self.session.is_solver_turn();
            let player = if solver_turn {
                &mut self.solver
            } else {
                &mut self.human
            };
            let player_name = player.name().to_string();

            if solver_turn {
                self.event_tx.send(GameEvent::Thinking {
                    player: player_name.clone(),
                })?;
            } else {
                self.event_tx.send(GameEvent::AwaitingMove {
                    player: player_name.clone(),
                    mark,
                    board: *self.session.board(),
                })?;
            }

            debug!(player = %player_name, "Waiting for move");
            let position = match player.get_move(&self.session).await? {
                Turn::Place(position) => position,
                Turn::Unrecognized(input) => {
                    self.event_tx.send(GameEvent::Rejected {
                        reason: format!("'{}' is not a square; use 0-8 or a name like 'center'", input),
                    })?;
                    continue;
                }
                Turn::Quit => {
                    info!(player = %player_name, "Player quit");
                    return Ok(None);
                }
            };

            match self.session.place(position) {
                Ok(_) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name,
                        mark,
                        position,
                        board: *self.session.board(),
                    })?;
                }
                Err(e @ SessionError::Move(_)) if !solver_turn => {
                    self.event_tx.send(GameEvent::Rejected {
                        reason: e.to_string(),
                    })?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Plays games until a seat quits, the human declines a rematch, or
    /// `max_games` games have finished.
    ///
    /// Returns the final score.
    #[instrument(skip(self))]
    pub async fn run(&mut self, max_games: Option<u32>) -> Result<Tally> {
        info!("Starting match");

        loop {
            if self.play_game().await?.is_none() {
                break;
            }

            if max_games.is_some_and(|limit| self.session.tally().games() >= limit) {
                break;
            }

            self.event_tx.send(GameEvent::RematchOffered)?;
            if !self.human.wants_rematch(&self.session).await? {
                break;
            }
            self.session.reset();
        }

        let tally = *self.session.tally();
        info!(%tally, "Match over");
        Ok(tally)
    }
}
