//! Strictly Grid simulator - drives [`strictly_grid`] games between
//! synthetic players.
//!
//! # Architecture
//!
//! - **Policies**: pick the next cell (random or first-empty)
//! - **Driver**: alternates policies, applies moves, notifies observers
//! - **Observers**: console log and JSON lines
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use strictly_grid_sim::{PolicyKind, SimConfig, simulate};
//!
//! # fn example() -> Result<(), strictly_grid_sim::SimError> {
//! let config = SimConfig::default()
//!     .with_seed(7)
//!     .with_x_policy(PolicyKind::FirstEmpty);
//! let tally = simulate(&config, std::io::sink())?;
//! assert_eq!(tally.total(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod error;
mod observers;
mod policy;
mod render;

pub use cli::Cli;
pub use config::{BoardPreset, OutputFormat, PolicyKind, RenderStyle, SimConfig};
pub use driver::{Driver, Tally, simulate};
pub use error::SimError;
pub use observers::{ConsoleObserver, EventSink, JsonObserver};
pub use policy::{FirstEmptyPolicy, MovePolicy, RandomPolicy};
pub use render::render;
