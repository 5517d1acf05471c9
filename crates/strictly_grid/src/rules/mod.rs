//! Game rules for the grid game.
//!
//! This module contains pure functions for evaluating a board according to
//! the rules. Rules are separated from board storage so the engine and tests
//! can call them directly.

pub mod win;

pub use win::{Line, winning_line};
