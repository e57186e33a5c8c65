//! Coinop cabinet kiosk
//!
//! Boots straight into the game menu on the cabinet terminal: d-pad or
//! arrow keys to browse, one button to play. Games run as child processes
//! and the menu comes back up when they exit.

mod display;
mod input;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use coinop_core::{GameCatalog, Kiosk, LaunchSupervisor, config};

use display::TerminalFrontend;
use input::CabinetInput;

#[derive(Parser)]
#[command(name = "coinop")]
#[command(about = "Arcade cabinet kiosk: game menu, launcher, and high scores")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding one subdirectory per game (overrides config)
    #[arg(long)]
    games: Option<PathBuf>,

    /// Catalog file listing the installed games (overrides config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print the catalog and exit instead of starting the kiosk
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };
    if let Some(games) = cli.games {
        config.paths.games_dir = games;
    }
    if let Some(catalog) = cli.catalog {
        config.paths.catalog = catalog;
    }

    let catalog = GameCatalog::load(&config.paths.catalog, &config.paths.games_dir)
        .with_context(|| format!("failed to load catalog {}", config.paths.catalog.display()))?;
    tracing::info!(
        "loaded {} games from {}",
        catalog.len(),
        config.paths.catalog.display()
    );

    if cli.list {
        for entry in catalog.entries() {
            println!("{:>3}  {:<24} {}", entry.id, entry.name, entry.runtime);
        }
        return Ok(());
    }

    let mut input = CabinetInput::new(config.tick_ms);
    let mut kiosk = Kiosk::new(catalog, LaunchSupervisor::new(config.launch.clone()));

    // Initialize terminal
    ratatui::init();
    let mut frontend = match TerminalFrontend::new() {
        Ok(frontend) => frontend,
        Err(err) => {
            ratatui::restore();
            return Err(err).context("failed to open the cabinet display");
        }
    };

    // Main loop
    let result = kiosk.run(&mut input, &mut frontend);

    // Restore terminal
    ratatui::restore();

    result
}
