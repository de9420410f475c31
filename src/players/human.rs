//! Human player reading moves line by line.

use super::{Player, Turn};
use crate::session::ArenaSession;
use anyhow::{Context, Result};
use strictly_tictactoe::Position;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

/// Human player fed from any line source, usually stdin.
///
/// Accepts a position number (0-8) or a square name such as
/// `center` or `top left`; `q` or end of input quits.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        let line = self
            .lines
            .next_line()
            .await
            .context("Failed to read player input")?;
        Ok(line.map(|l| l.trim().to_string()))
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn get_move(&mut self, _session: &ArenaSession) -> Result<Turn> {
        let Some(line) = self.read_line().await? else {
            debug!(player = %self.name, "Input closed");
            return Ok(Turn::Quit);
        };

        if is_quit(&line) {
            return Ok(Turn::Quit);
        }

        Ok(match Position::from_label_or_number(&line) {
            Some(position) => Turn::Place(position),
            None => Turn::Unrecognized(line),
        })
    }

    async fn wants_rematch(&mut self, _session: &ArenaSession) -> Result<bool> {
        let answer = self.read_line().await?;
        Ok(matches!(
            answer.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("" | "y" | "yes")
        ))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Mark, Solver};

    fn session() -> ArenaSession {
        ArenaSession::with_solver(Solver::playing(Mark::O), Mark::X)
    }

    #[tokio::test]
    async fn test_reads_numbers_and_labels() {
        let mut human = HumanPlayer::new("Ann", "4\n top right \nbogus\n".as_bytes());
        let s = session();
        assert_eq!(human.get_move(&s).await.unwrap(), Turn::Place(Position::Center));
        assert_eq!(human.get_move(&s).await.unwrap(), Turn::Place(Position::TopRight));
        assert_eq!(
            human.get_move(&s).await.unwrap(),
            Turn::Unrecognized("bogus".to_string())
        );
        assert_eq!(human.get_move(&s).await.unwrap(), Turn::Quit);
    }

    #[tokio::test]
    async fn test_quit_command() {
        let mut human = HumanPlayer::new("Ann", "Q\n".as_bytes());
        assert_eq!(human.get_move(&session()).await.unwrap(), Turn::Quit);
    }

    #[tokio::test]
    async fn test_rematch_answers() {
        let mut human = HumanPlayer::new("Ann", "\nYes\nn\n".as_bytes());
        let s = session();
        assert!(human.wants_rematch(&s).await.unwrap());
        assert!(human.wants_rematch(&s).await.unwrap());
        assert!(!human.wants_rematch(&s).await.unwrap());
        assert!(!human.wants_rematch(&s).await.unwrap());
    }
}
