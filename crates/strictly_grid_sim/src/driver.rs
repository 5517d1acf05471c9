//! Game driver: alternates policies and feeds observers.

use crate::config::{OutputFormat, SimConfig};
use crate::error::SimError;
use crate::observers::{ConsoleObserver, EventSink, JsonObserver};
use crate::policy::MovePolicy;
use std::io::Write;
use strictly_grid::{GameEngine, GameObserver, GameResult, GameSnapshot, GridError, Player};
use tracing::{debug, info, instrument, warn};

/// Plays games between two move policies.
pub struct Driver {
    player_x: Box<dyn MovePolicy>,
    player_o: Box<dyn MovePolicy>,
}

impl std::fmt::Debug for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Driver")
            .field("player_x", &self.player_x.name())
            .field("player_o", &self.player_o.name())
            .finish()
    }
}

impl Driver {
    /// Creates a driver with one policy per side.
    pub fn new(player_x: Box<dyn MovePolicy>, player_o: Box<dyn MovePolicy>) -> Self {
        Self { player_x, player_o }
    }

    /// Builds the policies named in `config`.
    ///
    /// With a seed, X draws from `seed` and O from `seed + 1`, so a seeded
    /// run is fully reproducible.
    #[instrument(skip(config))]
    pub fn from_config(config: &SimConfig) -> Self {
        let seed = *config.seed();
        Self::new(
            config.x_policy().build(seed),
            config.o_policy().build(seed.map(|s| s.wrapping_add(1))),
        )
    }

    fn policy_for(&mut self, player: Player) -> &mut dyn MovePolicy {
        match player {
            Player::X => self.player_x.as_mut(),
            Player::O => self.player_o.as_mut(),
        }
    }

    /// Plays one game to completion on a board of `size`.
    ///
    /// The observer sees `on_start` once, `on_update` after each accepted
    /// move and `on_end` once. A move onto an occupied cell is logged and the
    /// policy asked again; more rejections in a row than the board has cells
    /// is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the size is invalid, a policy has no move while
    /// the game is still open, or a policy keeps choosing illegal cells.
    #[instrument(skip(self, observer))]
    pub fn play<O: GameObserver + ?Sized>(
        &mut self,
        size: usize,
        observer: &mut O,
    ) -> Result<GameSnapshot, SimError> {
        let mut engine = GameEngine::new(size)?;
        let rejection_limit = engine.board().cell_count();
        let mut rejections = 0;
        observer.on_start(&engine.snapshot());

        while !engine.is_over() {
            let player = engine.current_player();
            let policy = self.policy_for(player);
            let pos = policy.choose(engine.board()).ok_or_else(|| {
                SimError::new(format!(
                    "{} policy for {} found no move on an open board",
                    policy.name(),
                    player
                ))
            })?;

            match engine.apply_move(pos) {
                Ok(result) => {
                    rejections = 0;
                    debug!(%player, %pos, %result, "Move applied");
                    observer.on_update(&engine.snapshot());
                }
                Err(GridError::CellOccupied(pos)) if rejections < rejection_limit => {
                    rejections += 1;
                    warn!(%player, %pos, rejections, "Policy chose an occupied cell, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        let snapshot = engine.snapshot();
        info!(
            result = %snapshot.result(),
            moves = snapshot.moves_played(),
            "Game finished"
        );
        observer.on_end(&snapshot);
        Ok(snapshot)
    }
}

/// Results counted across several games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::Display)]
#[display("X wins: {}, O wins: {}, draws: {}", x_wins, o_wins, draws)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: usize,
    /// Games won by O.
    pub o_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl Tally {
    /// Counts one finished game. In-progress results are ignored.
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::XWins => self.x_wins += 1,
            GameResult::OWins => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => {}
        }
    }

    /// Returns the number of games counted.
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Runs every game described by `config`, writing events to `out`.
///
/// # Errors
///
/// Returns an error if the config is invalid, a game fails, or writing to
/// `out` fails. A write failure stops the run after the game it occurred in.
#[instrument(skip(out), fields(board_size = *config.board_size(), games = *config.games()))]
pub fn simulate<'w, W: Write + 'w>(config: &SimConfig, out: W) -> Result<Tally, SimError> {
    config.validate()?;
    let mut driver = Driver::from_config(config);
    let mut observer: Box<dyn EventSink + 'w> = match config.format() {
        OutputFormat::Text => Box::new(ConsoleObserver::new(out, *config.style())),
        OutputFormat::Json => Box::new(JsonObserver::new(out)),
    };

    let mut tally = Tally::default();
    for game in 0..*config.games() {
        debug!(game, "Starting game");
        let snapshot = driver.play(*config.board_size(), observer.as_mut())?;
        if let Some(e) = observer.take_error() {
            return Err(SimError::new(format!("Failed to write output: {}", e)));
        }
        tally.record(snapshot.result());
    }

    info!(%tally, "Simulation complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts() {
        let mut tally = Tally::default();
        tally.record(GameResult::XWins);
        tally.record(GameResult::Draw);
        tally.record(GameResult::XWins);
        tally.record(GameResult::InProgress);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.to_string(), "X wins: 2, O wins: 0, draws: 1");
    }
}
