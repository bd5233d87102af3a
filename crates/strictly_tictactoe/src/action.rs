//! First-class move records.

use crate::player::PlayerId;
use crate::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
///
/// The engine records one `Move` per accepted placement, so the history can be
/// replayed, serialized, or checked against the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, derive_new::new,
)]
pub struct Move {
    /// The player making the move.
    pub player: PlayerId,
    /// Where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
