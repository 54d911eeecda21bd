//! Win and draw rules for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{VictoryLine, check_victory};
