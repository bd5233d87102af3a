//! Terminal consistency: the recorded result agrees with the moves.

use super::Invariant;
use crate::{GameEngine, GameStatus};

/// Invariant: Status and history agree.
///
/// - one mark per recorded move
/// - a winner made the last move
/// - a draw is only recorded on a full board with draw detection on
pub struct TerminalConsistentInvariant;

impl Invariant<GameEngine> for TerminalConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        if game.board().marked() != game.history().len() {
            return false;
        }

        match game.status() {
            GameStatus::InProgress => true,
            GameStatus::Complete(Some(winner)) => {
                game.history().last().map(|m| m.player) == Some(winner)
            }
            GameStatus::Complete(None) => game.rules().detect_draws && game.board().is_full(),
        }
    }

    fn description() -> &'static str {
        "Status is consistent with the move history"
    }
}
