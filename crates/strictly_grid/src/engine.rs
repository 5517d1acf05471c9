//! Game engine: the sole mutator of board and turn state.

use crate::board::Board;
use crate::error::GridError;
use crate::observer::GameSnapshot;
use crate::rules::{Line, winning_line};
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Outcome of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameResult {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board filled with no completed line.
    #[display("draw")]
    Draw,
}

impl GameResult {
    /// Result for a win by `player`.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameResult::XWins,
            Player::O => GameResult::OWins,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            GameResult::InProgress | GameResult::Draw => None,
        }
    }

    /// Checks if no further moves may be applied.
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

/// Grid game engine.
///
/// Owns the board together with whose turn it is, the last move and the
/// result. [`GameEngine::apply_move`] is the only way to change any of them.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    last_move: Option<Position>,
    result: GameResult,
    winning_line: Option<Line>,
    history: Vec<Position>,
}

impl GameEngine {
    /// Creates a new game on an empty board of the given size. X moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `size` is zero or too large to
    /// address every cell.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridError> {
        let board = Board::new(size)?;
        info!(size, "New game");
        Ok(Self {
            board,
            current_player: Player::X,
            last_move: None,
            result: GameResult::InProgress,
            winning_line: None,
            history: Vec::new(),
        })
    }

    /// Places the current player's mark at `pos` and evaluates the result.
    ///
    /// A completing move ends the game without passing the turn. Otherwise a
    /// full board is a draw, and anything else hands the turn to the opponent.
    ///
    /// # Errors
    ///
    /// - [`GridError::GameOver`] if the game has already ended
    /// - [`GridError::OutOfBounds`] if `pos` is off the board
    /// - [`GridError::CellOccupied`] if the cell is already marked
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(position = %pos, player = %self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameResult, GridError> {
        if self.result.is_terminal() {
            return Err(GridError::GameOver(self.result));
        }
        if !self.board.get(pos)?.is_empty() {
            return Err(GridError::CellOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, player.mark())?;
        self.last_move = Some(pos);
        self.history.push(pos);
        debug!(move_number = self.history.len(), "Mark placed");

        if let Some(line) = winning_line(&self.board, pos) {
            self.winning_line = Some(line);
            self.result = GameResult::won_by(player);
            info!(winner = %player, %line, "Line completed");
        } else if self.board.is_full() {
            self.result = GameResult::Draw;
            info!("Board full, draw");
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.result)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recently played position.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Returns the game result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    /// Takes a read-only copy of the current state for observers.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.clone(),
            self.current_player,
            self.last_move,
            self.result,
            self.winning_line,
            self.history.len(),
        )
    }
}
