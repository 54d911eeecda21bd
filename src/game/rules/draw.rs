//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no victory line is a draw. The move resolver
/// evaluates victory first, so a simultaneous full-board-and-line is
/// always reported as a win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
