//! Token-owned tic-tac-toe.
//!
//! Two participants, each identified by an opaque [`PlayerId`], alternate
//! placing marks on a 3x3 [`Board`] until one of them owns a line. The crate
//! is the game state machine only: how identities are issued, how the game is
//! shared with participants, and how it is stored or transported are the
//! host's business.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of optional owner marks
//! - **GameEngine**: turn ownership, move validation, win/draw detection
//! - **Rules**: pure line and draw checks, selectable per game
//! - **Contracts / Invariants**: pre- and postconditions of a move
//! - **Snapshot**: plain-data form of an engine for hosts
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{PlayerId, apply_move, create_game, is_complete, winner};
//!
//! # fn main() -> Result<(), strictly_tictactoe::GameError> {
//! let (alice, bob) = (PlayerId::generate(), PlayerId::generate());
//! let mut game = create_game(alice, bob)?;
//!
//! for (mover, position) in [(alice, 1), (bob, 4), (alice, 2), (bob, 5), (alice, 3)] {
//!     apply_move(&mut game, mover, position)?;
//! }
//!
//! assert!(is_complete(&game));
//! assert_eq!(winner(&game), Some(alice));
//! # Ok(())
//! # }
//! ```
//!
//! Engines are not internally synchronized. A host that lets several callers
//! reach one engine must serialize access itself.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod error;
mod invariants;
mod player;
mod position;
pub mod rules;
mod snapshot;

pub use action::Move;
pub use board::Board;
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract, MoveRequest, PlayersTurn,
    PositionInRange,
};
pub use engine::{GameEngine, GameStatus};
pub use error::GameError;
pub use invariants::{
    AlternatingTurnInvariant, EngineInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, TerminalConsistentInvariant,
};
pub use player::PlayerId;
pub use position::{Cell, Position};
pub use rules::{Rules, WinRule};
pub use snapshot::GameSnapshot;

/// Creates a game with an empty board; `player1` moves first.
///
/// # Errors
///
/// `GameError::DuplicatePlayer` if the two identities are equal.
pub fn create_game(player1: PlayerId, player2: PlayerId) -> Result<GameEngine, GameError> {
    GameEngine::new(player1, player2)
}

/// Applies one move. See [`GameEngine::apply_move`].
pub fn apply_move(game: &mut GameEngine, mover: PlayerId, position: u8) -> Result<(), GameError> {
    game.apply_move(mover, position)
}

/// True iff the game is terminal.
pub fn is_complete(game: &GameEngine) -> bool {
    game.is_complete()
}

/// The winner, once there is one.
pub fn winner(game: &GameEngine) -> Option<PlayerId> {
    game.winner()
}
