//! Serializable view of an engine.
//!
//! The engine keeps its fields private so its invariants can't be bypassed.
//! `GameSnapshot` is the plain-data form a host can store or send in whatever
//! format it likes; [`GameEngine::restore`] turns it back into an engine by
//! replaying the history, so a tampered snapshot is rejected rather than
//! trusted.

use crate::action::Move;
use crate::board::Board;
use crate::engine::{GameEngine, GameStatus};
use crate::error::GameError;
use crate::player::PlayerId;
use crate::rules::Rules;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Plain-data copy of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// First player (moves first).
    pub player1: PlayerId,
    /// Second player.
    pub player2: PlayerId,
    /// Identity that must move next.
    pub next_player: PlayerId,
    /// The board.
    pub board: Board,
    /// Completion status.
    pub status: GameStatus,
    /// Accepted moves, oldest first.
    pub history: Vec<Move>,
    /// Rules in force.
    pub rules: Rules,
}

impl From<&GameEngine> for GameSnapshot {
    fn from(game: &GameEngine) -> Self {
        Self {
            player1: game.player1(),
            player2: game.player2(),
            next_player: game.next_player(),
            board: *game.board(),
            status: game.status(),
            history: game.history().to_vec(),
            rules: game.rules(),
        }
    }
}

impl GameEngine {
    /// Captures the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        self.into()
    }

    /// Rebuilds an engine from a snapshot.
    ///
    /// # Errors
    ///
    /// Any error from replaying the history, or `InvariantViolation` if the
    /// snapshot's board, status or next player disagree with the replay.
    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self, GameError> {
        let mut game = Self::with_rules(snapshot.player1, snapshot.player2, snapshot.rules)?;
        for action in &snapshot.history {
            game.play(*action)?;
        }

        if game.snapshot() != *snapshot {
            warn!("Snapshot does not match its own history");
            return Err(GameError::InvariantViolation(
                "Snapshot does not match its move history".to_string(),
            ));
        }
        Ok(game)
    }
}
