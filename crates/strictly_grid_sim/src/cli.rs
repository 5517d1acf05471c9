//! Command-line interface for strictly_grid.

use crate::config::{BoardPreset, OutputFormat, PolicyKind, RenderStyle, SimConfig};
use crate::error::SimError;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Strictly Grid - random-play simulator for N×N mark-placement games
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Two random players fill an N×N grid until a line or a draw", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length
    #[arg(short, long, conflicts_with = "preset")]
    pub size: Option<usize>,

    /// Named board size (small = 3, middle = 5, large = 7)
    #[arg(long, value_enum)]
    pub preset: Option<BoardPreset>,

    /// Number of games to play
    #[arg(short, long)]
    pub games: Option<usize>,

    /// Seed for reproducible random play
    #[arg(long)]
    pub seed: Option<u64>,

    /// Board drawing style
    #[arg(long, value_enum)]
    pub style: Option<RenderStyle>,

    /// Event output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Move policy for player X
    #[arg(long, value_enum)]
    pub x_policy: Option<PolicyKind>,

    /// Move policy for player O
    #[arg(long, value_enum)]
    pub o_policy: Option<PolicyKind>,
}

impl Cli {
    /// Resolves the final configuration: flags over config file over defaults.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<SimConfig, SimError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_file(path)?,
            None => SimConfig::default(),
        };

        if let Some(size) = self.size.or(self.preset.map(BoardPreset::size)) {
            config = config.with_board_size(size);
        }
        if let Some(games) = self.games {
            config = config.with_games(games);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(style) = self.style {
            config = config.with_style(style);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        if let Some(policy) = self.x_policy {
            config = config.with_x_policy(policy);
        }
        if let Some(policy) = self.o_policy {
            config = config.with_o_policy(policy);
        }

        config.validate()?;
        let style: &str = config.style().as_ref();
        let format: &str = config.format().as_ref();
        debug!(board_size = *config.board_size(), style, format, "Configuration resolved");
        Ok(config)
    }
}
