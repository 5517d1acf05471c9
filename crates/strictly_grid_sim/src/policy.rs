//! Move selection policies for synthetic players.

use crate::config::PolicyKind;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strictly_grid::{Board, Position};
use tracing::{debug, instrument};

/// Trait for anything that can pick the next cell to mark.
pub trait MovePolicy {
    /// Picks a position on `board`, or `None` if it cannot choose.
    fn choose(&mut self, board: &Board) -> Option<Position>;

    /// Returns the policy's display name.
    fn name(&self) -> &str;
}

/// Picks a uniformly random empty cell.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a policy with a reproducible sequence of choices.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a policy seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        let choice = empty.choose(&mut self.rng).copied();
        debug!(candidates = empty.len(), ?choice, "Random policy chose");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Picks the first empty cell in row-major order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptyPolicy;

impl MovePolicy for FirstEmptyPolicy {
    fn choose(&mut self, board: &Board) -> Option<Position> {
        board.empty_positions().first().copied()
    }

    fn name(&self) -> &str {
        "first-empty"
    }
}

impl PolicyKind {
    /// Builds a boxed policy of this kind. `seed` only affects random play.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Random => match seed {
                Some(seed) => Box::new(RandomPolicy::seeded(seed)),
                None => Box::new(RandomPolicy::from_entropy()),
            },
            PolicyKind::FirstEmpty => Box::new(FirstEmptyPolicy),
        }
    }
}
