//! Coinop Scores - Operator CLI for cabinet high-score boards
//!
//! # Commands
//!
//! - `coinop-scores show <game>` - Print a game's board
//! - `coinop-scores submit <game> <name> <score>` - Record an entry directly
//! - `coinop-scores reset <game>` - Delete a game's board
//! - `coinop-scores enter <game> <score>` - Arcade-style interactive name entry
//!
//! # Usage
//!
//! ```bash
//! # From the cabinet root (where games/ lives)
//! coinop-scores show Pong
//!
//! # Seed a board for testing
//! coinop-scores submit Pong AAA 500
//!
//! # Wipe a board between events
//! coinop-scores reset Pong
//! ```

mod enter;
mod reset;
mod show;
mod submit;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Coinop Scores - Operator CLI for cabinet high-score boards
#[derive(Parser)]
#[command(name = "coinop-scores")]
#[command(about = "Operator tool for coinop high-score boards")]
#[command(version)]
struct Cli {
    /// Directory holding one subdirectory per game
    /// (defaults to the cabinet configuration)
    #[arg(long)]
    games: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a game's high-score board
    Show(show::ShowArgs),

    /// Record an entry directly, ranked like the kiosk would
    Submit(submit::SubmitArgs),

    /// Delete a game's board
    Reset(reset::ResetArgs),

    /// Arcade-style interactive name entry
    Enter(enter::EnterArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let games_dir = cli
        .games
        .unwrap_or_else(|| coinop_core::config::load().paths.games_dir);

    match cli.command {
        Commands::Show(args) => show::execute(&games_dir, args),
        Commands::Submit(args) => submit::execute(&games_dir, args),
        Commands::Reset(args) => reset::execute(&games_dir, args),
        Commands::Enter(args) => enter::execute(&games_dir, args),
    }
}
