//! Tic-tac-toe game core: pass-and-play and a scripted computer opponent.
//!
//! # Architecture
//!
//! - **Session**: board/state store and move resolver ([`GameSession`])
//! - **Opponent**: fixed-priority heuristic (win, block, center, random)
//! - **Scheduler**: thread-safe handle with the delayed computer reply
//!   and a snapshot channel for the UI ([`SharedSession`])
//!
//! Rendering, the host application, and persistence live outside this
//! crate; the UI drives the core through [`UserAction`] and renders the
//! [`Snapshot`] emitted after every transition.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Mark, PlayMode, Position, UserAction};
//!
//! let mut session = GameSession::new(PlayMode::Friend);
//! session.handle(UserAction::BoardTapped(Position::Center));
//!
//! // Circle moved first; now it's Cross's turn.
//! assert_eq!(session.state().current_turn(), Some(Mark::Cross));
//! assert_eq!(session.state().hint_text(), "Player 'X' turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod opponent;
mod scheduler;
mod session;

pub use action::UserAction;

pub use game::{
    Board, COMPUTER_MARK, Cell, GameState, Mark, PlayMode, Position, VictoryLine, check_victory,
    is_full,
};

pub use opponent::choose_move;

pub use scheduler::{COMPUTER_REPLY_DELAY, SharedSession};

pub use session::{GameSession, Snapshot};
