//! Aggregate game state and play mode.

use super::rules::VictoryLine;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// The mark the scripted opponent plays in computer mode.
pub const COMPUTER_MARK: Mark = Mark::Cross;

/// Whether the second player is a local human or the computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Local pass-and-play against another human.
    Friend,
    /// Against the scripted opponent, which plays [`COMPUTER_MARK`].
    Computer,
}

impl PlayMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            PlayMode::Friend => PlayMode::Computer,
            PlayMode::Computer => PlayMode::Friend,
        }
    }
}

/// Aggregate game state: status text, turn, victory, score counters.
///
/// Owned by the session and replaced wholesale on every transition;
/// observers only ever see complete snapshots, never partial mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) hint_text: String,
    pub(crate) current_turn: Option<Mark>,
    pub(crate) victory_line: Option<VictoryLine>,
    pub(crate) has_won: bool,
    pub(crate) circle_wins: u32,
    pub(crate) cross_wins: u32,
    pub(crate) draws: u32,
}

impl GameState {
    /// Creates the state for a fresh session: Circle to move, no
    /// victory, all counters zero.
    pub fn new(mode: PlayMode) -> Self {
        Self {
            hint_text: Self::turn_hint(Mark::Circle, mode),
            current_turn: Some(Mark::Circle),
            victory_line: None,
            has_won: false,
            circle_wins: 0,
            cross_wins: 0,
            draws: 0,
        }
    }

    /// Status line for the given mark's turn, worded per mode.
    pub(crate) fn turn_hint(mark: Mark, mode: PlayMode) -> String {
        match mode {
            PlayMode::Friend => format!("Player '{mark}' turn"),
            PlayMode::Computer if mark == COMPUTER_MARK => "Computer's turn".to_string(),
            PlayMode::Computer => "Your turn".to_string(),
        }
    }

    /// Status text for display.
    pub fn hint_text(&self) -> &str {
        &self.hint_text
    }

    /// The mark whose move is currently legal, or `None` once won.
    pub fn current_turn(&self) -> Option<Mark> {
        self.current_turn
    }

    /// The winning line, once a game has been won.
    pub fn victory_line(&self) -> Option<VictoryLine> {
        self.victory_line
    }

    /// Whether the current game has been won.
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Cumulative wins for Circle this session.
    pub fn circle_wins(&self) -> u32 {
        self.circle_wins
    }

    /// Cumulative wins for Cross this session.
    pub fn cross_wins(&self) -> u32 {
        self.cross_wins
    }

    /// Cumulative draws this session.
    pub fn draws(&self) -> u32 {
        self.draws
    }
}
