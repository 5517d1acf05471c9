//! Strictly Grid - pure game logic for N×N mark placement.
//!
//! Two players alternate placing marks on a square grid. A move wins when it
//! completes its row, its column, or a diagonal it lies on. A full board with
//! no completed line is a draw.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of [`CellState`] with bounds-checked access
//! - **GameEngine**: owns the board and applies moves, detecting the result
//! - **Rules**: win detection anchored at the last move
//! - **Observer**: read-only start/update/end notifications over snapshots
//!
//! # Example
//!
//! ```
//! use strictly_grid::{GameEngine, GameResult, Position};
//!
//! # fn example() -> Result<(), strictly_grid::GridError> {
//! let mut engine = GameEngine::new(1)?;
//! let result = engine.apply_move(Position::new(0, 0))?;
//! assert_eq!(result, GameResult::XWins);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod observer;
pub mod rules;
mod types;

pub use board::Board;
pub use engine::{GameEngine, GameResult};
pub use error::GridError;
pub use observer::{GameObserver, GameSnapshot};
pub use rules::Line;
pub use types::{CellState, Player, Position};
