//! Board positions and grid coordinates.
//!
//! Callers address cells with 1-indexed position numbers laid out row-major:
//!
//! ```text
//! 1|2|3
//! -+-+-
//! 4|5|6
//! -+-+-
//! 7|8|9
//! ```

use crate::board::Board;
use crate::error::GameError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Zero-indexed grid coordinate, always inside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: usize,
    col: usize,
}

/// Unchecked wire form of a [`Cell`].
#[derive(Deserialize, JsonSchema)]
struct RawCell {
    row: usize,
    col: usize,
}

impl TryFrom<RawCell> for Cell {
    type Error = GameError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col).ok_or(GameError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Cell {
    /// Creates a cell, or `None` if either coordinate is outside 0..=2.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Returns the cell offset by `(dr, dc)`, wrapping around each axis.
    pub fn wrapping_offset(self, dr: usize, dc: usize) -> Self {
        Self {
            row: (self.row + dr) % 3,
            col: (self.col + dc) % 3,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A position on the board, numbered 1-9.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 1)
    TopLeft,
    /// Top-center (position 2)
    TopCenter,
    /// Top-right (position 3)
    TopRight,
    /// Middle-left (position 4)
    MiddleLeft,
    /// Center (position 5)
    Center,
    /// Middle-right (position 6)
    MiddleRight,
    /// Bottom-left (position 7)
    BottomLeft,
    /// Bottom-center (position 8)
    BottomCenter,
    /// Bottom-right (position 9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Parses a caller-supplied position number (1-9).
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=9 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    /// Position number (1-9).
    pub fn number(self) -> u8 {
        match self {
            Position::TopLeft => 1,
            Position::TopCenter => 2,
            Position::TopRight => 3,
            Position::MiddleLeft => 4,
            Position::Center => 5,
            Position::MiddleRight => 6,
            Position::BottomLeft => 7,
            Position::BottomCenter => 8,
            Position::BottomRight => 9,
        }
    }

    /// Grid coordinate of this position.
    pub fn cell(self) -> Cell {
        let index = usize::from(self.number() - 1);
        Cell {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Position at a grid coordinate.
    pub fn from_cell(cell: Cell) -> Self {
        Self::ALL[cell.row * 3 + cell.col]
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Unoccupied positions on `board`, in ascending order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty_at(pos.cell()))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
