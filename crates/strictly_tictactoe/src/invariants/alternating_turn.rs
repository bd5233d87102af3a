//! Alternating turn invariant: player1, player2, player1, ...

use super::Invariant;
use crate::GameEngine;

/// Invariant: Players alternate turns, starting with player1.
///
/// `next_player` must be whoever did not make the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut expected = game.player1();

        for mov in game.history() {
            if mov.player != expected {
                return false;
            }
            expected = game.opponent_of(expected);
        }

        game.next_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns, player1 first"
    }
}
