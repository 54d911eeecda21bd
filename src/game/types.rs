//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A mark a player or the computer places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Mark {
    /// "O" — moves first in a fresh session.
    #[display("O")]
    Circle,
    /// "X" — the computer's mark in computer mode.
    #[display("X")]
    Cross,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Circle => Mark::Cross,
            Mark::Cross => Mark::Circle,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Occupied by a mark; only ever replaced on reset, never removed mid-game.
    Taken(Mark),
}

impl Cell {
    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A position on the 3x3 board, in row-major order.
///
/// The UI layer addresses cells by number 1..=9; the enum keeps
/// out-of-range positions unrepresentable in the core.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Cell 1.
    TopLeft,
    /// Cell 2.
    TopCenter,
    /// Cell 3.
    TopRight,
    /// Cell 4.
    MiddleLeft,
    /// Cell 5.
    Center,
    /// Cell 6.
    MiddleRight,
    /// Cell 7.
    BottomLeft,
    /// Cell 8.
    BottomCenter,
    /// Cell 9.
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending cell order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The center cell, preferred by the opponent heuristic.
    pub const CENTER: Position = Position::Center;

    /// Creates a position from the UI's 1..=9 cell numbering.
    pub fn from_cell_number(n: u8) -> Option<Self> {
        match n {
            1..=9 => Some(Self::ALL[usize::from(n) - 1]),
            _ => None,
        }
    }

    /// Returns the 1..=9 cell number of this position.
    pub fn cell_number(self) -> u8 {
        self as u8 + 1
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Replaces the cell at the given position.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if the cell at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells as a slice, in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns every empty position, in ascending cell order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Counts cells occupied by the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Taken(mark))
            .count()
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::Taken(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
