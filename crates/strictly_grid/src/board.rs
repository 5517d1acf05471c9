//! Fixed-size square board.

use crate::error::GridError;
use crate::types::{CellState, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// N×N board of cell states.
///
/// Cells are stored in row-major order. Every position with row and column in
/// `0..size` has exactly one cell.
///
/// Deserialization enforces the same invariant as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<CellState>,
}

impl TryFrom<RawBoard> for Board {
    type Error = GridError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.size)?;
        if raw.cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                size: raw.size,
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

fn cell_count(size: usize) -> Result<usize, GridError> {
    if size < 1 {
        return Err(GridError::InvalidSize(size));
    }
    size.checked_mul(size).ok_or(GridError::InvalidSize(size))
}

impl Board {
    /// Creates a new empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero or `size * size`
    /// overflows `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        let count = cell_count(size)?;
        Ok(Self {
            size,
            cells: vec![CellState::Empty; count],
        })
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Checks if the position lies on this board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size && pos.column() < self.size
    }

    /// Gets the cell state at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board.
    pub fn get(&self, pos: Position) -> Result<CellState, GridError> {
        let index = self.index(pos)?;
        Ok(self.cells[index])
    }

    /// Sets the cell state at the given position.
    ///
    /// Overwriting a marked cell is allowed here; the engine refuses it.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the position is off the board.
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<(), GridError> {
        let index = self.index(pos)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Returns all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| Position::new(row, column)))
    }

    /// Returns every empty position, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .zip(self.cells.iter())
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns one row of cells.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[CellState] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Reads a cell the caller already knows is in range.
    pub(crate) fn cell(&self, row: usize, column: usize) -> CellState {
        self.cells[row * self.size + column]
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                position: pos,
                size: self.size,
            });
        }
        Ok(pos.row() * self.size + pos.column())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line = self
                .row(row)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
