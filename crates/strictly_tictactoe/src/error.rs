//! Errors raised when creating games or applying moves.

use crate::player::PlayerId;
use crate::position::Cell;

/// Error that can occur when creating a game or applying a move.
///
/// Every error is a rejected call: the engine is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The mover is not the player whose turn it is.
    #[display("It's not {mover}'s turn (waiting on {expected})")]
    NotYourTurn {
        /// Identity that attempted the move.
        mover: PlayerId,
        /// Identity that must move next.
        expected: PlayerId,
    },

    /// The game already has a result.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Position number outside 1..=9.
    #[display("Position {_0} is out of range (must be 1-9)")]
    InvalidPosition(u8),

    /// The target cell already carries a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Cell),

    /// Grid coordinate outside the 3x3 board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Both seats were given the same identity.
    #[display("Players must be distinct, got {_0} twice")]
    DuplicatePlayer(PlayerId),

    /// An invariant was violated (postcondition or restore failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
