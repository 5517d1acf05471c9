//! Simulation configuration.

use crate::error::SimError;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Named board sizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum BoardPreset {
    /// 3×3.
    Small,
    /// 5×5.
    Middle,
    /// 7×7.
    Large,
}

impl BoardPreset {
    /// Returns the side length for this preset.
    pub fn size(self) -> usize {
        match self {
            BoardPreset::Small => 3,
            BoardPreset::Middle => 5,
            BoardPreset::Large => 7,
        }
    }
}

/// How boards are drawn in text output.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RenderStyle {
    /// Space-separated `_`/`x`/`o` rows.
    #[default]
    Plain,
    /// Box-drawn grid.
    Boxed,
}

/// Output format for game events.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable console log.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Move selection strategy for one side.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PolicyKind {
    /// Uniformly random empty cell.
    #[default]
    Random,
    /// First empty cell in row-major order.
    FirstEmpty,
}

/// Settings for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the board.
    board_size: usize,

    /// Number of games to play.
    games: usize,

    /// Seed for random policies. Unset means seeded from entropy.
    #[setters(strip_option)]
    seed: Option<u64>,

    /// Policy for player X.
    x_policy: PolicyKind,

    /// Policy for player O.
    o_policy: PolicyKind,

    /// Board drawing style for text output.
    style: RenderStyle,

    /// Event output format.
    format: OutputFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            board_size: BoardPreset::Small.size(),
            games: 1,
            seed: None,
            x_policy: PolicyKind::Random,
            o_policy: PolicyKind::Random,
            style: RenderStyle::Plain,
            format: OutputFormat::Text,
        }
    }
}

impl SimConfig {
    /// Loads configuration from a TOML file. Missing keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SimError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| SimError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(board_size = config.board_size, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Checks values the engine would otherwise reject mid-run.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), SimError> {
        if self.board_size < 1 {
            return Err(SimError::new(format!(
                "board_size must be at least 1, got {}",
                self.board_size
            )));
        }
        if self.games < 1 {
            return Err(SimError::new("games must be at least 1"));
        }
        Ok(())
    }
}
