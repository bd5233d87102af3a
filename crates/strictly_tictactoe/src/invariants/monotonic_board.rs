//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, GameEngine};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit a marked
/// cell, and must end on exactly the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::empty();

        for mov in game.history() {
            let cell = mov.position.cell();
            if reconstructed.set(cell.row(), cell.col(), mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
