//! Reset command - delete a game's board

use anyhow::{Context, Result};
use clap::Args;
use std::io::ErrorKind;
use std::path::Path;

use coinop_core::score;

/// Arguments for the reset command
#[derive(Args)]
pub struct ResetArgs {
    /// Game name (directory under the games dir)
    pub game: String,
}

/// Execute the reset command
pub fn execute(games_dir: &Path, args: ResetArgs) -> Result<()> {
    let path = score::ledger_path(&games_dir.join(&args.game));
    match std::fs::remove_file(&path) {
        Ok(()) => println!("Cleared the board for {}", args.game),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("No board for {} (nothing to clear)", args.game);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("failed to remove {}", path.display()));
        }
    }
    Ok(())
}
