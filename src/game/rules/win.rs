//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identifier of a winning triple.
///
/// Variants are declared in check order: rows top to bottom, columns
/// left to right, main diagonal (1-5-9), then anti diagonal (3-5-7).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum VictoryLine {
    /// Cells 1-2-3.
    #[display("top row")]
    TopRow,
    /// Cells 4-5-6.
    #[display("middle row")]
    MiddleRow,
    /// Cells 7-8-9.
    #[display("bottom row")]
    BottomRow,
    /// Cells 1-4-7.
    #[display("left column")]
    LeftColumn,
    /// Cells 2-5-8.
    #[display("middle column")]
    MiddleColumn,
    /// Cells 3-6-9.
    #[display("right column")]
    RightColumn,
    /// Cells 1-5-9.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 3-5-7.
    #[display("anti diagonal")]
    AntiDiagonal,
}

impl VictoryLine {
    /// The triple of positions this line covers.
    pub fn positions(self) -> [Position; 3] {
        match self {
            VictoryLine::TopRow => [Position::TopLeft, Position::TopCenter, Position::TopRight],
            VictoryLine::MiddleRow => {
                [Position::MiddleLeft, Position::Center, Position::MiddleRight]
            }
            VictoryLine::BottomRow => [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            VictoryLine::LeftColumn => {
                [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
            }
            VictoryLine::MiddleColumn => {
                [Position::TopCenter, Position::Center, Position::BottomCenter]
            }
            VictoryLine::RightColumn => [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            VictoryLine::MainDiagonal => {
                [Position::TopLeft, Position::Center, Position::BottomRight]
            }
            VictoryLine::AntiDiagonal => {
                [Position::TopRight, Position::Center, Position::BottomLeft]
            }
        }
    }

    /// The 8 lines in the order they are checked.
    pub const CHECK_ORDER: [VictoryLine; 8] = [
        VictoryLine::TopRow,
        VictoryLine::MiddleRow,
        VictoryLine::BottomRow,
        VictoryLine::LeftColumn,
        VictoryLine::MiddleColumn,
        VictoryLine::RightColumn,
        VictoryLine::MainDiagonal,
        VictoryLine::AntiDiagonal,
    ];
}

/// Checks whether the given mark holds a complete line.
///
/// Returns the first matching line in [`VictoryLine::CHECK_ORDER`], or
/// `None`. Pure: callers record the line on a real move; hypothetical
/// probes leave no trace.
#[instrument(skip(board))]
pub fn check_victory(board: &Board, mark: Mark) -> Option<VictoryLine> {
    VictoryLine::CHECK_ORDER.into_iter().find(|line| {
        line.positions()
            .iter()
            .all(|&pos| board.get(pos) == Cell::Taken(mark))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_check_order_covers_all_lines_in_declaration_order() {
        let declared: Vec<VictoryLine> = VictoryLine::iter().collect();
        assert_eq!(declared, VictoryLine::CHECK_ORDER.to_vec());
    }

    #[test]
    fn test_no_victory_empty_board() {
        let board = Board::new();
        assert_eq!(check_victory(&board, Mark::Circle), None);
        assert_eq!(check_victory(&board, Mark::Cross), None);
    }

    #[test]
    fn test_victory_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::Circle));
        board.set(Position::TopCenter, Cell::Taken(Mark::Circle));
        board.set(Position::TopRight, Cell::Taken(Mark::Circle));

        assert_eq!(check_victory(&board, Mark::Circle), Some(VictoryLine::TopRow));
        assert_eq!(check_victory(&board, Mark::Cross), None);
    }

    #[test]
    fn test_victory_anti_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopRight, Cell::Taken(Mark::Cross));
        board.set(Position::Center, Cell::Taken(Mark::Cross));
        board.set(Position::BottomLeft, Cell::Taken(Mark::Cross));

        assert_eq!(
            check_victory(&board, Mark::Cross),
            Some(VictoryLine::AntiDiagonal)
        );
    }

    #[test]
    fn test_no_victory_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::Circle));
        board.set(Position::TopCenter, Cell::Taken(Mark::Circle));
        assert_eq!(check_victory(&board, Mark::Circle), None);
    }

    #[test]
    fn test_first_match_wins_ties() {
        // Top row and left column complete at once; the row is reported
        // because rows are checked before columns.
        let mut board = Board::new();
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Cell::Taken(Mark::Cross));
        }

        assert_eq!(check_victory(&board, Mark::Cross), Some(VictoryLine::TopRow));
    }

    #[test]
    fn test_mixed_line_is_not_victory() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Taken(Mark::Circle));
        board.set(Position::TopCenter, Cell::Taken(Mark::Cross));
        board.set(Position::TopRight, Cell::Taken(Mark::Circle));
        assert_eq!(check_victory(&board, Mark::Circle), None);
        assert_eq!(check_victory(&board, Mark::Cross), None);
    }
}
