//! Strictly Arena - Unified CLI
//!
//! Play tic-tac-toe against the solver, or ask it for a single move.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, FirstArg, MarkArg, SearchArg};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use strictly_arena::{
    ArenaConfig, ArenaSession, HumanPlayer, Orchestrator, SolverPlayer, render_events,
};
use strictly_tictactoe::{Board, MoveScore, Position, SearchStats, Solver, SolverConfig};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never mix with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            first,
            games,
        } => run_play(config, first, games).await,
        Command::Solve {
            board,
            mark,
            search,
            json,
        } => run_solve(&board, mark, search, json),
    }
}

/// Run an interactive match on stdin/stdout
#[instrument]
async fn run_play(
    config_path: Option<PathBuf>,
    first: Option<FirstArg>,
    games: Option<u32>,
) -> Result<()> {
    let mut config =
        ArenaConfig::load(config_path.as_deref()).context("Failed to load arena config")?;
    if let Some(first) = first {
        config = config.with_first_player(first.into());
    }
    info!(human = %config.human_name(), mark = %config.human_mark(), "Starting play mode");

    let session = ArenaSession::new(&config);
    let solver = Solver::new(*config.solver());
    let human = HumanPlayer::new(
        config.human_name().clone(),
        BufReader::new(tokio::io::stdin()),
    );
    let opponent = SolverPlayer::new(
        "Solver",
        solver,
        Duration::from_millis(*config.think_delay_ms()),
    );

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(render_events(event_rx, std::io::stdout()));

    let mut orchestrator =
        Orchestrator::new(session, Box::new(human), Box::new(opponent), event_tx);
    let result = orchestrator.run(games).await;

    // Dropping the orchestrator closes the channel so the renderer drains and exits
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;

    let tally = result?;
    println!("\nFinal score: {}", tally);
    Ok(())
}

#[derive(Serialize)]
struct SolveReport {
    board: String,
    mark: String,
    position: Position,
    index: usize,
    stats: SearchStats,
    scores: Vec<MoveScore>,
}

/// Print the solver's choice for one board
#[instrument]
fn run_solve(board: &str, mark: MarkArg, search: SearchArg, json: bool) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board '{}'", board))?;

    let solver = Solver::new(
        SolverConfig::default()
            .with_mark(mark.into())
            .with_search(search.into()),
    );
    let (position, stats) = solver
        .choose_move_with_stats(&board)
        .context("Solver cannot move on this board")?;
    let scores = solver.analyze(&board)?;

    if json {
        let report = SolveReport {
            board: board.to_string(),
            mark: solver.mark().to_string(),
            position,
            index: position.to_index(),
            stats,
            scores,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display());
    println!(
        "{} plays {} ({}) after {} nodes",
        solver.mark(),
        position,
        position.to_index(),
        stats.nodes()
    );
    for score in &scores {
        println!(
            "  {:>2} {:<14} {:>3}",
            score.position().to_index(),
            score.position().to_string(),
            score.score()
        );
    }
    Ok(())
}
