//! Observer port for game lifecycle notifications.
//!
//! Observers receive owned snapshots and never a handle to the engine, so
//! they cannot alter game state.

use crate::board::Board;
use crate::engine::GameResult;
use crate::rules::Line;
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};

/// Read-only copy of a game at one point in time.
///
/// A deserialized snapshot carries a board that passed the same size and
/// cell-count checks as [`Board::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
    result: GameResult,
    winning_line: Option<Line>,
    moves_played: usize,
}

impl GameSnapshot {
    pub(crate) fn new(
        board: Board,
        current_player: Player,
        last_move: Option<Position>,
        result: GameResult,
        winning_line: Option<Line>,
        moves_played: usize,
    ) -> Self {
        Self {
            board,
            current_player,
            last_move,
            result,
            winning_line,
            moves_played,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns the player who made the most recent move.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_move
            .and_then(|pos| self.board.get(pos).ok())
            .and_then(|cell| cell.player())
    }

    /// Returns the result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns how many moves have been played.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }
}

/// Receives notifications over the life of one game.
///
/// All methods default to doing nothing, so implementors only override the
/// events they care about. Call order: `on_start` once, `on_update` after
/// every accepted move, `on_end` once when the result becomes terminal.
pub trait GameObserver {
    /// Called after the engine is constructed, before any move.
    fn on_start(&mut self, _snapshot: &GameSnapshot) {}

    /// Called after each successful move.
    fn on_update(&mut self, _snapshot: &GameSnapshot) {}

    /// Called once the game has ended.
    fn on_end(&mut self, _snapshot: &GameSnapshot) {}
}

impl<O: GameObserver + ?Sized> GameObserver for Box<O> {
    fn on_start(&mut self, snapshot: &GameSnapshot) {
        (**self).on_start(snapshot);
    }

    fn on_update(&mut self, snapshot: &GameSnapshot) {
        (**self).on_update(snapshot);
    }

    fn on_end(&mut self, snapshot: &GameSnapshot) {
        (**self).on_end(snapshot);
    }
}

impl<O: GameObserver> GameObserver for Vec<O> {
    fn on_start(&mut self, snapshot: &GameSnapshot) {
        self.iter_mut().for_each(|o| o.on_start(snapshot));
    }

    fn on_update(&mut self, snapshot: &GameSnapshot) {
        self.iter_mut().for_each(|o| o.on_update(snapshot));
    }

    fn on_end(&mut self, snapshot: &GameSnapshot) {
        self.iter_mut().for_each(|o| o.on_end(snapshot));
    }
}

/// Observer that ignores every event.
impl GameObserver for () {}
