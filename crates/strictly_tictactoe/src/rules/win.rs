//! Win detection logic.
//!
//! Detection runs once per move and is centred on the cell just marked: only a
//! line through that cell can have been completed by the move.

use crate::board::Board;
use crate::player::PlayerId;
use crate::position::{Cell, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a winning line is recognised.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum WinRule {
    /// Offsets of +1 and +2 from the placed cell, taken modulo 3 along the row,
    /// the column and both diagonal directions.
    ///
    /// Rows and columns come out exactly. The diagonal offsets also accept the
    /// "broken" diagonals of a board wrapped onto a torus, e.g. 2-6-7.
    #[default]
    Wraparound,
    /// The eight straight lines of the flat board.
    Lines,
}

/// `(row, col)` offset pairs examined by [`WinRule::Wraparound`].
const WRAP_OFFSETS: [[(usize, usize); 2]; 4] = [
    // Row
    [(0, 1), (0, 2)],
    // Column
    [(1, 0), (2, 0)],
    // Diagonal, down-right
    [(1, 1), (2, 2)],
    // Diagonal, down-left
    [(1, 2), (2, 1)],
];

/// The eight straight lines examined by [`WinRule::Lines`].
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` owns a complete line through `cell`.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, cell: Cell, mark: PlayerId, rule: WinRule) -> bool {
    let owned = |c: Cell| board.at(c) == Some(mark);
    match rule {
        WinRule::Wraparound => WRAP_OFFSETS.iter().any(|[(r1, c1), (r2, c2)]| {
            owned(cell.wrapping_offset(*r1, *c1)) && owned(cell.wrapping_offset(*r2, *c2))
        }),
        WinRule::Lines => {
            let placed = Position::from_cell(cell);
            LINES
                .iter()
                .filter(|line| line.contains(&placed))
                .any(|line| line.iter().all(|p| owned(p.cell())))
        }
    }
}

/// Scans the whole board for a completed line.
///
/// Returns the owner of the first line found, scanning cells in position
/// order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, rule: WinRule) -> Option<PlayerId> {
    Position::ALL.iter().find_map(|pos| {
        let cell = pos.cell();
        board
            .at(cell)
            .filter(|mark| completes_line(board, cell, *mark, rule))
    })
}
