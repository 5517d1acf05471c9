//! Core domain types for the grid game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the cell state this player writes.
    pub fn mark(self) -> CellState {
        match self {
            Player::X => CellState::X,
            Player::O => CellState::O,
        }
    }
}

/// State of a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum CellState {
    /// No mark yet.
    #[default]
    #[display("_")]
    Empty,
    /// Marked by player X.
    #[display("x")]
    X,
    /// Marked by player O.
    #[display("o")]
    O,
}

impl CellState {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::X => Some(Player::X),
            CellState::O => Some(Player::O),
        }
    }

    /// Checks if the cell is unmarked.
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }
}

impl From<Player> for CellState {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// A cell coordinate, 0-indexed from the top-left corner.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {column})")]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Creates a position. Bounds are checked against a board on use.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the row.
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub const fn column(self) -> usize {
        self.column
    }

    /// Checks if the position lies on the main diagonal.
    pub const fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Checks if the position lies on the anti-diagonal of a board of `size`.
    pub const fn on_anti_diagonal(self, size: usize) -> bool {
        self.row < size && self.column == size - 1 - self.row
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_alternates() {
        for player in Player::iter() {
            assert_ne!(player, player.opponent());
            assert_eq!(player, player.opponent().opponent());
        }
    }

    #[test]
    fn test_cell_state_round_trips_player() {
        for player in Player::iter() {
            assert_eq!(player.mark().player(), Some(player));
        }
        assert_eq!(CellState::Empty.player(), None);
    }

    #[test]
    fn test_cell_state_symbols() {
        let symbols: Vec<String> = CellState::iter().map(|c| c.to_string()).collect();
        assert_eq!(symbols, ["_", "x", "o"]);
    }

    #[test]
    fn test_position_equality_as_key() {
        let mut set = HashSet::new();
        set.insert(Position::new(1, 2));
        assert!(set.contains(&Position::new(1, 2)));
        assert!(!set.contains(&Position::new(2, 1)));
    }

    #[test]
    fn test_diagonal_membership() {
        assert!(Position::new(1, 1).on_main_diagonal());
        assert!(Position::new(1, 1).on_anti_diagonal(3));
        assert!(Position::new(0, 2).on_anti_diagonal(3));
        assert!(!Position::new(0, 1).on_main_diagonal());
        assert!(!Position::new(0, 1).on_anti_diagonal(3));
        assert!(Position::new(0, 0).on_anti_diagonal(1));
    }

    #[test]
    fn test_anti_diagonal_far_off_board() {
        assert!(!Position::new(usize::MAX, 0).on_anti_diagonal(3));
        assert!(!Position::new(0, usize::MAX).on_anti_diagonal(3));
        assert!(!Position::new(usize::MAX, usize::MAX).on_anti_diagonal(usize::MAX));
        assert!(!Position::new(3, 0).on_anti_diagonal(3));
        assert!(Position::new(0, usize::MAX - 1).on_anti_diagonal(usize::MAX));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(2, 0).to_string(), "(2, 0)");
    }
}
