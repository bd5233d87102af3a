//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from the engine so
//! contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinRule, check_winner, completes_line};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Rule selection for one game.
///
/// The default reproduces the classic engine exactly: wraparound win
/// detection and no draw state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "kebab-case")]
pub struct Rules {
    /// How a completed line is recognised.
    pub win_rule: WinRule,
    /// End the game as `Complete(None)` when the board fills without a winner.
    pub detect_draws: bool,
}
