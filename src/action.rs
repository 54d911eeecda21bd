//! User actions flowing in from the UI layer.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// The three entry points the UI collaborator can drive.
///
/// Invalid actions (occupied cell, finished game, out-of-turn tap,
/// premature play-again) leave the session unchanged; there is no
/// error path back to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    /// Human selected a board cell.
    BoardTapped(Position),
    /// Requests a reset; honored only once the prior game ended.
    PlayAgainButtonClicked,
    /// Toggles pass-and-play / vs-computer; always resets the board
    /// and clears the score counters.
    SwitchPlayMode,
}
