//! Win detection anchored at the last move.
//!
//! Only the lines through the cell just played can have been completed by
//! that move, so at most four lines of `size` cells are inspected.

use crate::board::Board;
use crate::types::{CellState, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of `size` cells that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// A full row.
    #[display("row {}", _0)]
    Row(usize),
    /// A full column.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns the positions making up this line on a board of `size`.
    pub fn positions(self, size: usize) -> Vec<Position> {
        (0..size)
            .map(|i| match self {
                Line::Row(row) => Position::new(row, i),
                Line::Column(column) => Position::new(i, column),
                Line::MainDiagonal => Position::new(i, i),
                Line::AntiDiagonal => Position::new(i, size - 1 - i),
            })
            .collect()
    }
}

/// Returns the line completed through `last`, if any.
///
/// The mark at `last` is compared against its row and column, then against
/// the main diagonal only when `last` lies on it and the anti-diagonal only
/// when `last` lies on it. An empty or off-board `last` never wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board, last: Position) -> Option<Line> {
    let mark = board.get(last).ok()?;
    if mark == CellState::Empty {
        return None;
    }

    let size = board.size();
    let (row, column) = (last.row(), last.column());

    if uniform(size, mark, |i| board.cell(row, i)) {
        return Some(Line::Row(row));
    }
    if uniform(size, mark, |i| board.cell(i, column)) {
        return Some(Line::Column(column));
    }
    if last.on_main_diagonal() && uniform(size, mark, |i| board.cell(i, i)) {
        return Some(Line::MainDiagonal);
    }
    if last.on_anti_diagonal(size) && uniform(size, mark, |i| board.cell(i, size - 1 - i)) {
        return Some(Line::AntiDiagonal);
    }

    None
}

/// Checks that `size` cells read along a line all equal `mark`.
fn uniform(size: usize, mark: CellState, cell: impl Fn(usize) -> CellState) -> bool {
    (0..size).all(|i| cell(i) == mark)
}
