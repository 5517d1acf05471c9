//! Simulator error types.

use derive_more::{Display, Error};
use strictly_grid::GridError;
use tracing::instrument;

/// Simulator error with caller location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Simulator error: {} at {}:{}", message, file, line)]
pub struct SimError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SimError {
    /// Creates a new simulator error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<GridError> for SimError {
    #[track_caller]
    fn from(err: GridError) -> Self {
        Self::new(format!("Game error: {}", err))
    }
}
