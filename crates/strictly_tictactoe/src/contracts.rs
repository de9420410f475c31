//! Pre- and postconditions for placing a mark.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::typestate::GameInProgress;
use tracing::{instrument, warn};

/// Conditions around applying action `A` to state `S`.
pub trait Contract<S, A> {
    /// Must hold before the action is applied.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Must hold between the state before and after the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Placing one mark on an in-progress game.
///
/// Before: the mover is the side to move and the square is empty.
/// After: exactly one move was added and [`GameInvariants`] hold.
pub struct PlaceMark;

impl Contract<GameInProgress, Move> for PlaceMark {
    #[instrument(skip(game))]
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        if action.player != game.to_move() {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !game.board().is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        Ok(())
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        let mut broken: Vec<String> = GameInvariants::violations(after)
            .iter()
            .map(ToString::to_string)
            .collect();
        if after.history().len() != before.history().len() + 1 {
            broken.push("one move per ply".to_string());
        }

        if broken.is_empty() {
            Ok(())
        } else {
            warn!(?broken, "Postcondition failed");
            Err(MoveError::InvariantViolation(broken.join(", ")))
        }
    }
}
