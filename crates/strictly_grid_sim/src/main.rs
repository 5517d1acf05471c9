//! Strictly Grid - random-play simulator CLI.

use anyhow::Result;
use clap::Parser;
use strictly_grid_sim::{Cli, simulate};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only game output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve()?;
    info!(?config, "Starting simulation");

    let tally = simulate(&config, std::io::stdout())?;
    if *config.games() > 1 {
        println!("\n{}", tally);
    }

    Ok(())
}
