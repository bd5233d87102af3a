//! The 3x3 grid of ownership marks.

use crate::error::GameError;
use crate::player::PlayerId;
use crate::position::{Cell, Position};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 3x3 board; each cell holds the identity of the player who marked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Option<PlayerId>; 3]; 3],
}

impl Board {
    /// Creates a board with every cell unset.
    pub fn empty() -> Self {
        Self {
            cells: [[None; 3]; 3],
        }
    }

    /// Mark at `(row, col)`, or `None` if unset or off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<PlayerId> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Mark at a cell.
    pub fn at(&self, cell: Cell) -> Option<PlayerId> {
        self.cells[cell.row()][cell.col()]
    }

    /// Marks `(row, col)` for `owner`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` for coordinates off the board, `CellOccupied` if the cell
    /// is already marked. A marked cell is never overwritten.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, owner: PlayerId) -> Result<(), GameError> {
        let cell = Cell::new(row, col).ok_or(GameError::OutOfBounds { row, col })?;
        let slot = &mut self.cells[cell.row()][cell.col()];
        if slot.is_some() {
            warn!(%cell, "Refusing to overwrite marked cell");
            return Err(GameError::CellOccupied(cell));
        }
        *slot = Some(owner);
        Ok(())
    }

    /// Checks if a cell is unset.
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.at(cell).is_none()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Number of marked cells.
    pub fn marked(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Number of cells marked by `owner`.
    pub fn count(&self, owner: PlayerId) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Some(owner))
            .count()
    }

    /// Formats the board as text, drawing marks with `symbol` and empty
    /// cells as their position number.
    pub fn render(&self, symbol: impl Fn(PlayerId) -> char) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let cell = pos.cell();
            match self.at(cell) {
                Some(owner) => result.push(symbol(owner)),
                None => result.push_str(&pos.number().to_string()),
            }
            if cell.col() < 2 {
                result.push('|');
            } else if cell.row() < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}
