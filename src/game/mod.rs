//! Tic-tac-toe domain: board, marks, aggregate state, and rules.

pub mod rules;
mod state;
mod types;

pub use rules::{VictoryLine, check_victory, is_full};
pub use state::{COMPUTER_MARK, GameState, PlayMode};
pub use types::{Board, Cell, Mark, Position};
