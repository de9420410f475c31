//! Strictly Arena library - terminal play against a perfect solver
//!
//! Game rules and the minimax solver live in `strictly_tictactoe`; this
//! crate seats a human and the solver at one board and runs the match.
//!
//! # Architecture
//!
//! - **Config**: [`ArenaConfig`] loaded from TOML
//! - **Session**: [`ArenaSession`] owns the board, turn order and score
//! - **Players**: [`HumanPlayer`] and [`SolverPlayer`] behind the [`Player`] trait
//! - **Orchestrator**: drives turns and emits [`GameEvent`]s for rendering
//!
//! # Example
//!
//! ```
//! use strictly_arena::{ArenaConfig, ArenaSession, SessionStatus};
//! use strictly_tictactoe::Position;
//!
//! let mut session = ArenaSession::new(&ArenaConfig::default());
//! session.human_move(Position::TopLeft)?;
//! let (reply, status) = session.solver_move()?;
//! assert_eq!(reply, Position::Center);
//! assert_eq!(status, SessionStatus::InProgress);
//! # Ok::<(), strictly_arena::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena_config;
mod orchestrator;
mod players;
mod render;
mod session;

pub use arena_config::{ArenaConfig, ConfigError, DEFAULT_CONFIG_PATH, FirstPlayer};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HumanPlayer, Player, SolverPlayer, Turn};
pub use render::{render, render_events};
pub use session::{ArenaSession, SessionError, SessionStatus, Tally};
