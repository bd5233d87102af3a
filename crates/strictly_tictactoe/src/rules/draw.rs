//! Draw detection logic.

use super::win::{WinRule, check_winner};
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which nobody owns a line under `rule`.
#[instrument]
pub fn is_draw(board: &Board, rule: WinRule) -> bool {
    is_full(board) && check_winner(board, rule).is_none()
}
