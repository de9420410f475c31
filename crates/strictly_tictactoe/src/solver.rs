//! Perfect-play minimax solver.
//!
//! The solver scores positions by backward induction over the complete
//! remaining game tree. Terminal boards score `10 - depth` when the
//! solver's mark has won, `depth - 10` when its opponent has won, and `0`
//! for a draw, so among equal outcomes the search prefers the fastest win
//! and the slowest loss.
//!
//! Candidate moves are always tried in ascending position order and only
//! a strictly better score replaces the current best, so ties resolve to
//! the lowest index.

use crate::config::{Opening, SearchStrategy, SolverConfig};
use crate::error::InvalidStateError;
use crate::rules::{GameResult, evaluate_terminal};
use crate::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Magnitude of a win found at depth zero.
pub const WIN_SCORE: i32 = 10;

/// Score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct MoveScore {
    /// Where the solver would play.
    position: Position,
    /// Minimax value of the board after playing there.
    score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including terminal leaves.
    nodes: u64,
    /// True when an opening shortcut answered without searching.
    shortcut: bool,
}

/// Stateless perfect-play move chooser.
///
/// `Solver` holds only its configuration, so one value can be shared
/// freely across threads; every call works on its own copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Creates a default solver playing `mark`.
    pub fn playing(mark: Player) -> Self {
        Self::new(SolverConfig::default().with_mark(mark))
    }

    /// The mark this solver plays.
    pub fn mark(&self) -> Player {
        *self.config.mark()
    }

    /// Scores `board` from the solver's point of view.
    ///
    /// `maximizing` is true when the solver's mark is to move on `board`.
    /// `depth` is the number of plies already made below the decision
    /// being evaluated. Scores saturate at the `i32` range, so any depth is
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::NoEmptySquares`] if the search meets an
    /// undecided board with no empty square.
    pub fn minimax_score(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
    ) -> Result<i32, InvalidStateError> {
        let mut stats = SearchStats::default();
        self.search(*board, depth, maximizing, i32::MIN, i32::MAX, &mut stats)
    }

    /// Chooses the optimal position for the solver's mark.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidStateError::Finished`] if the board is already
    /// decided (a full board is always decided).
    pub fn choose_move(&self, board: &Board) -> Result<Position, InvalidStateError> {
        self.choose_move_with_stats(board).map(|(position, _)| position)
    }

    /// Like [`Solver::choose_move`], also reporting search counters.
    #[instrument(skip(self, board), fields(board = %board, mark = %self.mark()))]
    pub fn choose_move_with_stats(
        &self,
        board: &Board,
    ) -> Result<(Position, SearchStats), InvalidStateError> {
        ensure_playable(board)?;

        let mut stats = SearchStats::default();
        if let Some(position) = self.opening_move(board) {
            stats.shortcut = true;
            debug!(%position, "Opening shortcut");
            return Ok((position, stats));
        }

        let mut best: Option<MoveScore> = None;
        for position in board.empty_positions() {
            let child = board.with(position, self.mark());
            // A candidate must beat the current best strictly, so the
            // window can start at the best score found so far.
            let alpha = best.map_or(i32::MIN, |b| b.score);
            let score = self.search(child, 0, false, alpha, i32::MAX, &mut stats)?;
            if best.is_none_or(|b| score > b.score) {
                best = Some(MoveScore::new(position, score));
            }
        }

        // ensure_playable guarantees at least one empty square
        let best = best.ok_or(InvalidStateError::NoEmptySquares)?;
        debug!(
            position = %best.position,
            score = best.score,
            nodes = stats.nodes,
            "Move chosen"
        );
        Ok((best.position, stats))
    }

    /// Exact minimax score of every legal move, in ascending position order.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Solver::choose_move`].
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn analyze(&self, board: &Board) -> Result<Vec<MoveScore>, InvalidStateError> {
        ensure_playable(board)?;
        board
            .empty_positions()
            .map(|position| {
                let child = board.with(position, self.mark());
                self.minimax_score(&child, 0, false)
                    .map(|score| MoveScore::new(position, score))
            })
            .collect()
    }

    fn opening_move(&self, board: &Board) -> Option<Position> {
        let placed = 9 - board.empty_count();
        match self.config.opening() {
            Opening::CenterWhenEmpty if placed == 0 => Some(Position::Center),
            Opening::CenterWhenUntouched if placed <= 1 && board.is_empty(Position::Center) => {
                Some(Position::Center)
            }
            _ => None,
        }
    }

    fn search(
        &self,
        board: Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        stats: &mut SearchStats,
    ) -> Result<i32, InvalidStateError> {
        stats.nodes += 1;

        match evaluate_terminal(&board) {
            GameResult::Won(winner) if winner == self.mark() => {
                return Ok(WIN_SCORE.saturating_sub(signed(depth)));
            }
            GameResult::Won(_) => return Ok(signed(depth).saturating_sub(WIN_SCORE)),
            GameResult::Draw => return Ok(0),
            GameResult::Ongoing => {}
        }

        let mover = if maximizing {
            self.mark()
        } else {
            self.mark().opponent()
        };
        let prune = *self.config.search() == SearchStrategy::AlphaBeta;

        let mut best: Option<i32> = None;
        for position in board.empty_positions() {
            let score = self.search(
                board.with(position, mover),
                depth.saturating_add(1),
                !maximizing,
                alpha,
                beta,
                stats,
            )?;

            best = Some(match best {
                None => score,
                Some(b) if maximizing => b.max(score),
                Some(b) => b.min(score),
            });

            if prune {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
                if beta <= alpha {
                    break;
                }
            }
        }

        best.ok_or(InvalidStateError::NoEmptySquares)
    }
}

fn signed(depth: u32) -> i32 {
    i32::try_from(depth).unwrap_or(i32::MAX)
}

fn ensure_playable(board: &Board) -> Result<(), InvalidStateError> {
    match evaluate_terminal(board) {
        GameResult::Ongoing => Ok(()),
        result => Err(InvalidStateError::Finished(result)),
    }
}
