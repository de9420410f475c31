//! Plain-text rendering of [`GameEvent`]s.

use crate::orchestrator::GameEvent;
use crate::session::SessionStatus;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::warn;

/// Renders one event as the text shown to the player.
pub fn render(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted { number, first } => {
            format!("=== Game {} ({} opens) ===\n", number, first)
        }
        GameEvent::AwaitingMove {
            player,
            mark,
            board,
        } => format!("\n{}\n{} ({}) > ", board.display(), player, mark),
        GameEvent::Thinking { player } => format!("{} is thinking...\n", player),
        GameEvent::MoveMade {
            player,
            mark,
            position,
            ..
        } => format!("{} ({}) played {}\n", player, mark, position),
        GameEvent::Rejected { reason } => format!("{}\n", reason),
        GameEvent::GameOver {
            status,
            tally,
            board,
        } => {
            let headline = match status {
                SessionStatus::PlayerWon => "You win!",
                SessionStatus::OpponentWon => "Solver wins.",
                SessionStatus::Draw => "Draw.",
                SessionStatus::Empty | SessionStatus::InProgress => "Game stopped.",
            };
            format!("\n{}\n{}\nScore: {}\n", board.display(), headline, tally)
        }
        GameEvent::RematchOffered => "Play again? [Y/n] ".to_string(),
    }
}

/// Writes every event received on `rx` to `out` until the sender closes.
pub async fn render_events<W: Write>(mut rx: mpsc::UnboundedReceiver<GameEvent>, mut out: W) {
    while let Some(event) = rx.recv().await {
        let text = render(&event);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            warn!(error = %e, "Failed to write game output");
            return;
        }
    }
}
