//! A human-versus-solver session with a running score.

use crate::arena_config::ArenaConfig;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_tictactoe::{
    Board, GameFinished, GameInProgress, GameSetup, InvalidStateError, Mark, MoveError, Outcome,
    Position, Solver, Transition,
};
use tracing::{debug, info, instrument, warn};

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum SessionStatus {
    /// No mark placed yet.
    Empty,
    /// At least one mark placed and nobody has won.
    InProgress,
    /// The human completed a line.
    PlayerWon,
    /// The solver completed a line.
    OpponentWon,
    /// Full board with no line.
    Draw,
}

impl SessionStatus {
    /// True once the game accepts no more placements.
    pub fn is_over(self) -> bool {
        matches!(
            self,
            SessionStatus::PlayerWon | SessionStatus::OpponentWon | SessionStatus::Draw
        )
    }
}

/// Games won, lost and drawn since the session was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Tally {
    /// Games the human won.
    human_wins: u32,
    /// Games the solver won.
    solver_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    fn record(&mut self, status: SessionStatus) {
        match status {
            SessionStatus::PlayerWon => self.human_wins += 1,
            SessionStatus::OpponentWon => self.solver_wins += 1,
            SessionStatus::Draw => self.draws += 1,
            SessionStatus::Empty | SessionStatus::InProgress => {}
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.solver_wins + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} - {} Solver ({} drawn)",
            self.human_wins, self.solver_wins, self.draws
        )
    }
}

/// Error from a session operation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The move was rejected by the game rules.
    #[display("{}", _0)]
    Move(MoveError),

    /// The solver was asked to move in a finished position.
    #[display("{}", _0)]
    Solver(InvalidStateError),

    /// The requested side is not the side to move.
    #[display("It is {}'s turn", _0)]
    NotYourTurn(Mark),

    /// The game is over; call [`ArenaSession::reset`] first.
    #[display("Game is over, start a new one")]
    GameOver,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(e) => Some(e),
            SessionError::Solver(e) => Some(e),
            SessionError::NotYourTurn(_) | SessionError::GameOver => None,
        }
    }
}

impl From<MoveError> for SessionError {
    fn from(e: MoveError) -> Self {
        SessionError::Move(e)
    }
}

impl From<InvalidStateError> for SessionError {
    fn from(e: InvalidStateError) -> Self {
        SessionError::Solver(e)
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Empty(GameSetup),
    InProgress(GameInProgress),
    Finished(GameFinished),
}

/// Game state for one human playing repeated games against the solver.
///
/// The session owns the board and the turn order; the solver it carries
/// is stateless and only reads the board it is given.
#[derive(Debug, Clone)]
pub struct ArenaSession {
    phase: Phase,
    solver: Solver,
    opening_mark: Mark,
    tally: Tally,
}

impl ArenaSession {
    /// Creates a session from arena configuration.
    #[instrument(skip(config))]
    pub fn new(config: &ArenaConfig) -> Self {
        Self::with_solver(Solver::new(*config.solver()), config.opening_mark())
    }

    /// Creates a session with an explicit solver and opening mark.
    pub fn with_solver(solver: Solver, opening_mark: Mark) -> Self {
        info!(solver_mark = %solver.mark(), %opening_mark, "Creating arena session");
        Self {
            phase: Phase::Empty(GameSetup::new()),
            solver,
            opening_mark,
            tally: Tally::default(),
        }
    }

    /// The solver's mark.
    pub fn solver_mark(&self) -> Mark {
        self.solver.mark()
    }

    /// The human's mark.
    pub fn human_mark(&self) -> Mark {
        self.solver.mark().opponent()
    }

    /// The running score.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        match &self.phase {
            Phase::Empty(setup) => setup.board(),
            Phase::InProgress(game) => game.board(),
            Phase::Finished(game) => game.board(),
        }
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> Vec<Position> {
        let moves = match &self.phase {
            Phase::Empty(_) => return Vec::new(),
            Phase::InProgress(game) => game.history(),
            Phase::Finished(game) => game.history(),
        };
        moves.iter().map(|m| m.position).collect()
    }

    /// Mark to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        match &self.phase {
            Phase::Empty(_) => Some(self.opening_mark),
            Phase::InProgress(game) => Some(game.to_move()),
            Phase::Finished(_) => None,
        }
    }

    /// True when the solver should move next.
    pub fn is_solver_turn(&self) -> bool {
        self.to_move() == Some(self.solver_mark())
    }

    /// Current status.
    pub fn status(&self) -> SessionStatus {
        match &self.phase {
            Phase::Empty(_) => SessionStatus::Empty,
            Phase::InProgress(_) => SessionStatus::InProgress,
            Phase::Finished(game) => self.status_of(game.outcome()),
        }
    }

    fn status_of(&self, outcome: &Outcome) -> SessionStatus {
        match outcome.winner() {
            Some(mark) if mark == self.solver_mark() => SessionStatus::OpponentWon,
            Some(_) => SessionStatus::PlayerWon,
            None => SessionStatus::Draw,
        }
    }

    /// Places the mark of whoever is to move.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameOver`] after the game finished, or
    /// [`SessionError::Move`] when the square is taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, position: Position) -> Result<SessionStatus, SessionError> {
        let game = match &self.phase {
            Phase::Empty(setup) => setup.clone().start(self.opening_mark),
            Phase::InProgress(game) => game.clone(),
            Phase::Finished(_) => {
                warn!("Placement after game over");
                return Err(SessionError::GameOver);
            }
        };

        // The phase is only replaced once the move is accepted, so a
        // rejected move leaves the session untouched.
        let mark = game.to_move();
        self.phase = match game.play(position)? {
            Transition::InProgress(game) => Phase::InProgress(game),
            Transition::Finished(game) => Phase::Finished(game),
        };

        let status = self.status();
        debug!(%mark, %status, "Mark placed");
        if status.is_over() {
            self.tally.record(status);
            info!(%status, tally = %self.tally, "Game over");
        }
        Ok(status)
    }

    /// Places the human's mark.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotYourTurn`] when the solver is to move, plus the
    /// errors of [`ArenaSession::place`].
    pub fn human_move(&mut self, position: Position) -> Result<SessionStatus, SessionError> {
        self.ensure_turn(self.human_mark())?;
        self.place(position)
    }

    /// Lets the solver choose and place its mark.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotYourTurn`] when the human is to move, or
    /// [`SessionError::GameOver`] after the game finished.
    #[instrument(skip(self))]
    pub fn solver_move(&mut self) -> Result<(Position, SessionStatus), SessionError> {
        self.ensure_turn(self.solver_mark())?;
        let position = self.solver.choose_move(self.board())?;
        let status = self.place(position)?;
        Ok((position, status))
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), SessionError> {
        match self.to_move() {
            None => Err(SessionError::GameOver),
            Some(to_move) if to_move != mark => Err(SessionError::NotYourTurn(to_move)),
            Some(_) => Ok(()),
        }
    }

    /// Clears the board for a new game, keeping the score.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let phase = std::mem::replace(&mut self.phase, Phase::Empty(GameSetup::new()));
        if let Phase::Finished(game) = phase {
            self.phase = Phase::Empty(game.restart());
        }
        debug!("Session reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::Player;

    fn session() -> ArenaSession {
        ArenaSession::with_solver(Solver::playing(Player::O), Player::X)
    }

    #[test]
    fn test_starts_empty_with_opening_mark() {
        let s = session();
        assert_eq!(s.status(), SessionStatus::Empty);
        assert_eq!(s.to_move(), Some(Player::X));
        assert!(!s.is_solver_turn());
    }

    #[test]
    fn test_first_placement_moves_to_in_progress() {
        let mut s = session();
        assert_eq!(s.human_move(Position::TopLeft), Ok(SessionStatus::InProgress));
        assert!(s.is_solver_turn());
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut s = session();
        s.human_move(Position::Center).unwrap();
        s.solver_move().unwrap();
        let before = *s.board();
        let taken = s.history()[1];
        assert!(matches!(
            s.human_move(taken),
            Err(SessionError::Move(MoveError::SquareOccupied(_)))
        ));
        assert_eq!(*s.board(), before);
        assert_eq!(s.to_move(), Some(Player::X));
    }

    #[test]
    fn test_turn_order_enforced() {
        let mut s = session();
        assert_eq!(s.solver_move(), Err(SessionError::NotYourTurn(Player::X)));
        s.human_move(Position::Center).unwrap();
        assert_eq!(
            s.human_move(Position::TopLeft),
            Err(SessionError::NotYourTurn(Player::O))
        );
    }
}
