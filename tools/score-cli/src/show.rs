//! Show command - print a game's high-score board

use anyhow::Result;
use clap::Args;
use std::path::Path;

use coinop_core::score::{self, ScoreEntry};

/// Arguments for the show command
#[derive(Args)]
pub struct ShowArgs {
    /// Game name (directory under the games dir)
    pub game: String,
}

/// Execute the show command
pub fn execute(games_dir: &Path, args: ShowArgs) -> Result<()> {
    let path = score::ledger_path(&games_dir.join(&args.game));
    let board = score::load(&path);
    print_board(&args.game, &board);
    Ok(())
}

/// Print a board the way the cabinet ranks it, best first.
pub fn print_board(game: &str, board: &[ScoreEntry]) {
    println!("=== {} ===", game);
    if board.is_empty() {
        println!("  (no scores yet)");
        return;
    }
    for (i, entry) in board.iter().enumerate() {
        println!("  {:>2}. {}  {:>8}", i + 1, entry.name, entry.score);
    }
}
