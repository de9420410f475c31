//! Command-line interface for strictly_arena.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_arena::FirstPlayer;
use strictly_tictactoe::{Mark, SearchStrategy};

/// Strictly Arena - play tic-tac-toe against a perfect solver
#[derive(Parser, Debug)]
#[command(name = "strictly_arena")]
#[command(about = "Tic-tac-toe against a minimax solver that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the solver in the terminal
    Play {
        /// Path to arena config (defaults to arena.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override who opens each game
        #[arg(long, value_enum)]
        first: Option<FirstArg>,

        /// Stop after this many games
        #[arg(long)]
        games: Option<u32>,
    },

    /// Print the solver's move for a board
    Solve {
        /// Board as nine cells, row by row (X, O, and '.', '_' or '-' for empty), e.g. "XX..O...."
        board: String,

        /// Mark the solver plays
        #[arg(short, long, value_enum, default_value = "o")]
        mark: MarkArg,

        /// Search strategy
        #[arg(short, long, value_enum, default_value = "exhaustive")]
        search: SearchArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Seat that opens each game.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstArg {
    /// The human opens.
    Human,
    /// The solver opens.
    Solver,
}

impl From<FirstArg> for FirstPlayer {
    fn from(arg: FirstArg) -> Self {
        match arg {
            FirstArg::Human => FirstPlayer::Human,
            FirstArg::Solver => FirstPlayer::Solver,
        }
    }
}

/// Solver mark.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

/// Search strategy.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchArg {
    /// Full tree walk.
    Exhaustive,
    /// Alpha-beta pruning; same moves, fewer nodes.
    AlphaBeta,
}

impl From<SearchArg> for SearchStrategy {
    fn from(arg: SearchArg) -> Self {
        match arg {
            SearchArg::Exhaustive => SearchStrategy::Exhaustive,
            SearchArg::AlphaBeta => SearchStrategy::AlphaBeta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_defaults() {
        let cli = Cli::try_parse_from(["strictly_arena", "solve", "XX..O...."]).unwrap();
        match cli.command {
            Command::Solve {
                board,
                mark,
                search,
                json,
            } => {
                assert_eq!(board, "XX..O....");
                assert_eq!(mark, MarkArg::O);
                assert_eq!(search, SearchArg::Exhaustive);
                assert!(!json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_play_flags() {
        let cli = Cli::try_parse_from([
            "strictly_arena",
            "play",
            "--first",
            "solver",
            "--games",
            "3",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                config,
                first,
                games,
            } => {
                assert!(config.is_none());
                assert_eq!(first, Some(FirstArg::Solver));
                assert_eq!(games, Some(3));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_alpha_beta_value_name() {
        let cli =
            Cli::try_parse_from(["strictly_arena", "solve", ".........", "-s", "alpha-beta"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Solve {
                search: SearchArg::AlphaBeta,
                ..
            }
        ));
    }
}
