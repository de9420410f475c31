//! Properties every in-progress game must satisfy.
//!
//! Checked after each move in debug builds (see
//! [`PlaceMark`](crate::PlaceMark)), and usable directly in tests.

use crate::rules::{GameResult, evaluate_terminal};
use crate::typestate::GameInProgress;
use crate::{Board, Player};

/// A named property of a state.
pub trait Invariant<S> {
    /// Short name used in violation reports.
    const NAME: &'static str;

    /// True when the property holds.
    fn holds(state: &S) -> bool;
}

/// An invariant that did not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{}", name)]
pub struct InvariantViolation {
    /// Name of the broken invariant.
    pub name: &'static str,
}

/// Several invariants checked together.
///
/// Implemented for tuples of up to three [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Every invariant that fails for `state`, in tuple order.
    fn violations(state: &S) -> Vec<InvariantViolation>;

    /// `Ok` when all hold, otherwise the failures.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations = Self::violations(state);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn violations(state: &S) -> Vec<InvariantViolation> {
                let mut found = Vec::new();
                $(
                    if !$inv::holds(state) {
                        found.push(InvariantViolation { name: $inv::NAME });
                    }
                )+
                found
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Mover for ply `n` of a game opened by `first`.
fn mover_at(first: Player, n: usize) -> Player {
    if n % 2 == 0 { first } else { first.opponent() }
}

/// Moves alternate from the opening player, and `to_move` is next in line.
pub struct TurnOrder;

impl Invariant<GameInProgress> for TurnOrder {
    const NAME: &'static str = "turn order";

    fn holds(game: &GameInProgress) -> bool {
        let first = game.first_player();
        let history = game.history();
        history
            .iter()
            .enumerate()
            .all(|(n, m)| m.player == mover_at(first, n))
            && game.to_move() == mover_at(first, history.len())
    }
}

/// Replaying the history onto an empty board gives the current board.
pub struct BoardMatchesHistory;

impl Invariant<GameInProgress> for BoardMatchesHistory {
    const NAME: &'static str = "board matches history";

    fn holds(game: &GameInProgress) -> bool {
        let replayed = game.history().iter().try_fold(Board::new(), |board, m| {
            board
                .is_empty(m.position)
                .then(|| board.with(m.position, m.player))
        });
        replayed.as_ref() == Some(game.board())
    }
}

/// An in-progress board has no winner and at least one empty square.
pub struct Undecided;

impl Invariant<GameInProgress> for Undecided {
    const NAME: &'static str = "undecided";

    fn holds(game: &GameInProgress) -> bool {
        evaluate_terminal(game.board()) == GameResult::Ongoing
    }
}

/// Everything checked after a move.
pub type GameInvariants = (TurnOrder, BoardMatchesHistory, Undecided);
