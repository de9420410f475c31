//! Game lifecycle as separate types per phase.
//!
//! Only [`GameInProgress`] has a move method and only [`GameFinished`]
//! has an outcome, so a move on a finished game or an outcome for a
//! running one cannot be written.
//!
//! ```text
//! GameSetup -start-> GameInProgress -make_move-> GameInProgress | GameFinished
//! GameFinished -restart-> GameSetup
//! ```

use crate::action::{Move, MoveError};
use crate::contracts::{Contract, PlaceMark};
use crate::outcome::Outcome;
use crate::{Board, Player, Position};
use tracing::{debug, instrument};

/// A game that has not started; the board is empty.
#[derive(Debug, Clone, Default)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Empty board, nobody to move yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The (empty) board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Begins play with `first_player` to move.
    #[instrument(skip(self))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            to_move: first_player,
            first_player,
        }
    }
}

/// A running game.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) to_move: Player,
    pub(crate) first_player: Player,
}

impl GameInProgress {
    /// Applies `action`, ending the game if it completes a line or fills
    /// the board.
    ///
    /// [`PlaceMark`] preconditions are always checked; its postconditions
    /// only in debug builds.
    ///
    /// # Errors
    ///
    /// [`MoveError::WrongPlayer`] or [`MoveError::SquareOccupied`] for an
    /// illegal move; the game is consumed either way.
    #[instrument(skip(self), fields(to_move = %self.to_move, ply = self.history.len()))]
    pub fn make_move(self, action: Move) -> Result<Transition, MoveError> {
        PlaceMark::pre(&self, &action)?;

        let mut next = self.clone();
        next.board = self.board.with(action.position, action.player);
        next.history.push(action);

        if let Some(outcome) = Outcome::of(&next.board) {
            debug!(%outcome, plies = next.history.len(), "Game over");
            return Ok(Transition::Finished(GameFinished {
                board: next.board,
                history: next.history,
                outcome,
            }));
        }

        next.to_move = action.player.opponent();
        if cfg!(debug_assertions) {
            PlaceMark::post(&self, &next)?;
        }
        Ok(Transition::InProgress(next))
    }

    /// Moves for whoever is to move.
    pub fn play(self, position: Position) -> Result<Transition, MoveError> {
        let action = Move::new(self.to_move, position);
        self.make_move(action)
    }

    /// Rebuilds a game from its moves, stopping at the move that ends it.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(first_player: Player, moves: &[Move]) -> Result<Transition, MoveError> {
        let mut transition = Transition::InProgress(GameSetup::new().start(first_player));
        for &action in moves {
            transition = match transition {
                Transition::InProgress(game) => game.make_move(action)?,
                finished @ Transition::Finished(_) => return Ok(finished),
            };
        }
        Ok(transition)
    }

    /// Side to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Side that made the first move.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty squares in index order.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.board.empty_positions().collect()
    }
}

/// An ended game with its outcome.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameFinished {
    /// How the game ended.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Final board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every move, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Discards this game for a fresh setup.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new()
    }
}

/// Where a move left the game.
#[derive(Debug)]
pub enum Transition {
    /// Play continues.
    InProgress(GameInProgress),
    /// The move ended the game.
    Finished(GameFinished),
}
