//! Whole-tree properties of the minimax solver.

use std::collections::HashSet;
use strictly_tictactoe::{
    Board, GameResult, InvalidStateError, LINES, Opening, Player, Position, SearchStrategy,
    Solver, SolverConfig, Square, evaluate_terminal,
};

/// Every board reachable from the empty board with `first` moving first.
fn reachable_boards(first: Player) -> HashSet<Board> {
    fn walk(board: Board, to_move: Player, seen: &mut HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        if evaluate_terminal(&board).is_terminal() {
            return;
        }
        for pos in board.empty_positions() {
            walk(board.with(pos, to_move), to_move.opponent(), seen);
        }
    }

    let mut seen = HashSet::new();
    walk(Board::new(), first, &mut seen);
    seen
}

/// Plays the solver against every opponent continuation and returns the
/// number of finished games, panicking if the opponent ever wins.
fn assert_never_loses(solver: &Solver, board: Board, to_move: Player) -> usize {
    match evaluate_terminal(&board) {
        GameResult::Won(winner) => {
            assert_eq!(winner, solver.mark(), "solver lost on {}", board);
            return 1;
        }
        GameResult::Draw => return 1,
        GameResult::Ongoing => {}
    }

    if to_move == solver.mark() {
        let pos = solver.choose_move(&board).expect("ongoing board has a move");
        assert!(board.is_empty(pos), "solver played on occupied square");
        assert_never_loses(solver, board.with(pos, to_move), to_move.opponent())
    } else {
        board
            .empty_positions()
            .map(|pos| assert_never_loses(solver, board.with(pos, to_move), to_move.opponent()))
            .sum()
    }
}

#[test]
fn test_reachable_board_count() {
    // The classic count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_boards(Player::X).len(), 5478);
}

#[test]
fn test_terminal_classification_over_all_reachable_boards() {
    for board in reachable_boards(Player::X) {
        let result = evaluate_terminal(&board);
        let owned_line = |player: Player| {
            LINES
                .iter()
                .any(|line| line.iter().all(|&p| board.get(p) == Square::Occupied(player)))
        };

        match result {
            GameResult::Won(player) => assert!(owned_line(player), "{}", board),
            GameResult::Draw => {
                assert_eq!(board.empty_count(), 0, "{}", board);
                assert!(!owned_line(Player::X) && !owned_line(Player::O), "{}", board);
            }
            GameResult::Ongoing => {
                assert!(board.empty_count() > 0, "{}", board);
                assert!(!owned_line(Player::X) && !owned_line(Player::O), "{}", board);
            }
        }
    }
}

#[test]
fn test_never_loses_as_second_player() {
    let solver = Solver::playing(Player::O);
    let games = assert_never_loses(&solver, Board::new(), Player::X);
    assert!(games > 0);
}

#[test]
fn test_never_loses_as_first_player() {
    let solver = Solver::playing(Player::O);
    assert_never_loses(&solver, Board::new(), Player::O);
}

#[test]
fn test_never_loses_playing_x() {
    let solver = Solver::playing(Player::X);
    assert_never_loses(&solver, Board::new(), Player::X);
    assert_never_loses(&solver, Board::new(), Player::O);
}

#[test]
fn test_never_loses_with_untouched_opening() {
    let solver = Solver::new(SolverConfig::default().with_opening(Opening::CenterWhenUntouched));
    assert_never_loses(&solver, Board::new(), Player::X);
}

#[test]
fn test_never_loses_from_any_position_not_already_lost() {
    let solver = Solver::playing(Player::O);
    let mut checked = 0;
    for board in reachable_boards(Player::X) {
        let o_to_move = board.count(Player::X) == board.count(Player::O) + 1;
        if !o_to_move || evaluate_terminal(&board).is_terminal() {
            continue;
        }
        let value = solver
            .analyze(&board)
            .unwrap()
            .iter()
            .map(|s| *s.score())
            .max()
            .unwrap();
        // Boards X already wins by force are outside the guarantee.
        if value < 0 {
            continue;
        }
        assert_never_loses(&solver, board, Player::O);
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_alpha_beta_matches_exhaustive_everywhere() {
    let exhaustive = Solver::playing(Player::O);
    let pruned = Solver::new(
        SolverConfig::default()
            .with_mark(Player::O)
            .with_search(SearchStrategy::AlphaBeta),
    );

    for board in reachable_boards(Player::X) {
        let o_to_move = board.count(Player::X) == board.count(Player::O) + 1;
        if !o_to_move || evaluate_terminal(&board).is_terminal() {
            continue;
        }
        assert_eq!(
            exhaustive.choose_move(&board).unwrap(),
            pruned.choose_move(&board).unwrap(),
            "strategies disagree on {}",
            board
        );
    }
}

#[test]
fn test_choose_move_is_deterministic_and_non_mutating() {
    let solver = Solver::default();
    for text in ["X........", ".X.......", "X...O...X", "XO..X....", "OX.XO...X"] {
        let board: Board = text.parse().unwrap();
        let snapshot = board;
        let first = solver.choose_move(&board).unwrap();
        let second = solver.choose_move(&board).unwrap();
        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_empty_board_center_is_tied_optimal() {
    let solver = Solver::default();
    let scores = solver.analyze(&Board::new()).unwrap();
    assert_eq!(scores.len(), 9);
    let best = scores.iter().map(|s| *s.score()).max().unwrap();
    let center = scores
        .iter()
        .find(|s| *s.position() == Position::Center)
        .unwrap();
    assert_eq!(*center.score(), best);
    assert_eq!(solver.choose_move(&Board::new()).unwrap(), Position::Center);
}

#[test]
fn test_prefers_shallowest_win() {
    // O can win now at 2, or set up slower wins elsewhere.
    let solver = Solver::playing(Player::O);
    let board: Board = "OO.XX....".parse().unwrap();
    assert_eq!(solver.choose_move(&board).unwrap(), Position::TopRight);
}

#[test]
fn test_prefers_longest_loss() {
    // X . . / . X . / . . .  with O on the top edge: X threatens 8.
    // Blocking still loses to a fork two plies later, but any other reply
    // loses immediately, so the block is the slowest loss.
    let solver = Solver::playing(Player::O);
    let board: Board = "XO..X....".parse().unwrap();
    let scores = solver.analyze(&board).unwrap();

    assert_eq!(solver.choose_move(&board).unwrap(), Position::BottomRight);
    for entry in &scores {
        let expected = if *entry.position() == Position::BottomRight {
            3 - 10
        } else {
            1 - 10
        };
        assert_eq!(*entry.score(), expected, "{}", entry.position());
    }
}

#[test]
fn test_full_board_without_winner() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(evaluate_terminal(&board), GameResult::Draw);
    assert_eq!(
        Solver::default().choose_move(&board),
        Err(InvalidStateError::Finished(GameResult::Draw))
    );
}

#[test]
fn test_minimax_score_matches_analysis() {
    let solver = Solver::default();
    let board: Board = "X...O...X".parse().unwrap();
    for entry in solver.analyze(&board).unwrap() {
        let child = board.with(*entry.position(), Player::O);
        assert_eq!(solver.minimax_score(&child, 0, false).unwrap(), *entry.score());
    }
}
