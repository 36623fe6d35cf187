//! Unbeatable tic-tac-toe core.
//!
//! Pure game logic for a two-mode tic-tac-toe (human-vs-human and
//! human-vs-computer), where the computer opponent plays a provably
//! optimal strategy via exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board Model**: [`Board`] and the pure [`rules`] functions answer
//!   occupancy and terminal-state queries.
//! - **Search Engine**: [`engine::choose_move`] walks every continuation
//!   of the current position and returns the optimal cell, deterministic
//!   down to its tie-break.
//! - **Game / Session**: [`Game`] validates and applies moves; a
//!   [`GameSession`] owns the cross-round state (mode, names, scores)
//!   on behalf of whatever UI is driving the core.
//!
//! The core is synchronous, stateless across calls, and does no I/O;
//! rendering, input capture, and "thinking" delays belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameMode, GameSession, Player, Position};
//!
//! let mut session = GameSession::with_starter(
//!     GameMode::VsComputer,
//!     Some("Alice".to_string()),
//!     None,
//!     Player::X,
//! );
//!
//! session.play(Position::Center)?;
//! let reply = session.computer_turn()?;
//! assert!(session.game().board().is_occupied(reply));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod engine;
mod game;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::Position;
pub use session::{GameMode, GameSession, Scores};
pub use types::{Board, Outcome, Player, Square};
