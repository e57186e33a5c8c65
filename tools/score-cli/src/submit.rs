//! Submit command - record an entry directly
//!
//! Ranks and truncates exactly like the kiosk, so seeded boards look the
//! same as ones earned on the cabinet.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::path::Path;

use coinop_core::score;

use crate::show;

/// Arguments for the submit command
#[derive(Args)]
pub struct SubmitArgs {
    /// Game name (directory under the games dir)
    pub game: String,

    /// Player name, up to three characters (A-Z, '.', space)
    pub name: String,

    /// Score value (negative values clamp to zero)
    pub score: i64,
}

/// Execute the submit command
pub fn execute(games_dir: &Path, args: SubmitArgs) -> Result<()> {
    let name = normalize_name(&args.name)?;
    let score = args.score.clamp(0, u32::MAX as i64) as u32;

    let path = score::ledger_path(&games_dir.join(&args.game));
    let board = score::load(&path);
    if !score::qualifies(&board, score) {
        println!("Score {} does not make the board for {}", score, args.game);
        return Ok(());
    }

    score::insert_and_persist(&path, &name, score)
        .with_context(|| format!("failed to write {}", path.display()))?;

    show::print_board(&args.game, &score::load(&path));
    Ok(())
}

/// Internal: validate and uppercase an operator-typed name. Extracted for
/// testability.
fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.to_uppercase();
    if name.is_empty() || name.chars().count() > 3 {
        bail!("Name must be 1-3 characters, got '{}'", raw);
    }
    if let Some(bad) = name.chars().find(|c| !matches!(c, 'A'..='Z' | '.' | ' ')) {
        bail!("Name may only use A-Z, '.', and space; '{}' is not allowed", bad);
    }
    Ok(name)
}
