//! Score submission flow.
//!
//! Qualify check first, then the interactive name editor, then one insert
//! into the ledger file. Driven against the same input/frontend collaborator
//! traits as the menu, so games and tools can run it anywhere.

use std::path::Path;

use anyhow::{Context, Result};

use crate::frontend::{Frontend, NameEntryView};
use crate::input::InputSource;
use crate::score::{self, NameEntry};

/// Record `score` on the board at `path`, asking the player for a name.
///
/// Returns `Ok(false)` without touching input or screen when the score does
/// not make the board. Otherwise runs the name editor until the player
/// commits, persists the entry, and returns `Ok(true)`. Control always
/// returns to the caller; qualifying or not never ends the process.
pub fn submit_score(
    path: &Path,
    score: u32,
    input: &mut dyn InputSource,
    frontend: &mut dyn Frontend,
) -> Result<bool> {
    let board = score::load(path);
    if !score::qualifies(&board, score) {
        tracing::debug!("score {} does not qualify for {}", score, path.display());
        return Ok(false);
    }

    let mut editor = NameEntry::new();

    loop {
        frontend.show_name_entry(&NameEntryView {
            slots: editor.slots(),
            cursor: editor.cursor(),
            score,
        })?;

        let frame = input.next_frame()?;
        if frame.up {
            editor.cycle_up();
        }
        if frame.down {
            editor.cycle_down();
        }
        if frame.left {
            editor.move_left();
        }
        if frame.right {
            editor.move_right();
        }
        if frame.confirm
            && let Some(name) = editor.confirm()
        {
            score::insert_and_persist(path, &name, score)
                .with_context(|| format!("failed to write ledger {}", path.display()))?;
            tracing::info!("recorded {}-{} in {}", name, score, path.display());
            return Ok(true);
        }
    }
}
