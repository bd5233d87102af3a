//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}. The
//! preconditions run on every move; postconditions run in debug builds.

use crate::engine::GameEngine;
use crate::error::GameError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::player::PlayerId;
use crate::position::Position;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// A move as submitted by a caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MoveRequest {
    /// Identity attempting the move.
    pub mover: PlayerId,
    /// Raw position number.
    pub position: u8,
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the mover holds the turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `NotYourTurn` unless `mover` is the next player.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine, mover: PlayerId) -> Result<(), GameError> {
        if mover != game.next_player() {
            warn!(%mover, expected = %game.next_player(), "Move out of turn");
            Err(GameError::NotYourTurn {
                mover,
                expected: game.next_player(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the game has no result yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameAlreadyOver` once the game is terminal.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine) -> Result<(), GameError> {
        if game.is_complete() {
            warn!(status = %game.status(), "Move after game end");
            Err(GameError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position number is 1-9.
pub struct PositionInRange;

impl PositionInRange {
    /// Parses the number, failing with `InvalidPosition`.
    #[instrument]
    pub fn check(number: u8) -> Result<Position, GameError> {
        Position::from_number(number).ok_or_else(|| {
            warn!(number, "Position out of range");
            GameError::InvalidPosition(number)
        })
    }
}

/// Precondition: the target cell is unmarked.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `CellOccupied` if the cell carries a mark.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine, position: Position) -> Result<(), GameError> {
        let cell = position.cell();
        if game.board().is_empty_at(cell) {
            Ok(())
        } else {
            warn!(%cell, "Cell already occupied");
            Err(GameError::CellOccupied(cell))
        }
    }
}

/// All move preconditions, checked in a fixed order.
pub struct LegalMove;

impl LegalMove {
    /// Validates a move and returns the parsed position.
    ///
    /// Order: turn, game over, range, occupancy. The first failure wins.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine, mover: PlayerId, number: u8) -> Result<Position, GameError> {
        PlayersTurn::check(game, mover)?;
        GameNotOver::check(game)?;
        let position = PositionInRange::check(number)?;
        CellIsEmpty::check(game, position)?;
        Ok(position)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - exactly one mark was added
/// - the engine invariants hold
pub struct MoveContract;

impl Contract<GameEngine, MoveRequest> for MoveContract {
    fn pre(game: &GameEngine, action: &MoveRequest) -> Result<(), GameError> {
        LegalMove::check(game, action.mover, action.position).map(|_| ())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), GameError> {
        if after.board().marked() != before.board().marked() + 1 {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: move must add exactly one mark".to_string(),
            ));
        }
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
