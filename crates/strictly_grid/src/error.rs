//! Error types for board access and move application.

use crate::engine::GameResult;
use crate::types::Position;

/// Error that can occur when building a board or applying a move.
///
/// Every variant is a caller-input error: the operation that returned it left
/// the board and game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GridError {
    /// The board size must be at least 1 and its cell count must fit in `usize`.
    #[display("Invalid board size {}: must be at least 1 with size*size cells addressable", _0)]
    InvalidSize(usize),

    /// A serialized board does not carry one cell per position.
    #[display("Board of size {} needs {} cells, found {}", size, expected, found)]
    CellCountMismatch {
        /// Declared side length.
        size: usize,
        /// Cells a board of that size holds.
        expected: usize,
        /// Cells actually supplied.
        found: usize,
    },

    /// The position lies outside the board.
    #[display("Position {} is outside a {}x{} board", position, size, size)]
    OutOfBounds {
        /// The rejected position.
        position: Position,
        /// Size of the board it was checked against.
        size: usize,
    },

    /// The cell at the position is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over: {}", _0)]
    GameOver(GameResult),
}

impl std::error::Error for GridError {}
