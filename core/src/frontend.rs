//! Render/audio collaborator boundary.
//!
//! The kiosk draws nothing itself: once per tick it hands the frontend a
//! snapshot of what should be on screen, and the frontend translates that to
//! its own medium (the shipped binary draws a terminal UI). Ambient music is
//! owned by the same collaborator because the launch sequence has to pause
//! and resume it around a running game.

use anyhow::Result;

use crate::catalog::GameEntry;
use crate::menu::MenuMode;
use crate::score::ScoreEntry;

/// Everything needed to draw the menu screen.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub entries: &'a [GameEntry],
    pub highlighted: usize,
    pub mode: MenuMode,
    /// Dialog choice, meaningful in [`MenuMode::ConfirmingExit`]
    pub exit_choice_yes: bool,
    /// Description of the highlighted game, empty when none
    pub description: &'a str,
    /// High-score board of the highlighted game, best first
    pub scoreboard: &'a [ScoreEntry],
}

/// Everything needed to draw the name-entry screen.
#[derive(Debug, Clone, Copy)]
pub struct NameEntryView {
    /// The three editable letters plus the confirm marker
    pub slots: [char; 4],
    /// Which slot the player is on
    pub cursor: usize,
    /// The score being recorded
    pub score: u32,
}

/// External renderer/audio collaborator.
pub trait Frontend {
    /// Draw the menu (or the exit dialog over it, per `view.mode`).
    fn show_menu(&mut self, view: &MenuView<'_>) -> Result<()>;

    /// Draw the high-score name editor.
    fn show_name_entry(&mut self, view: &NameEntryView) -> Result<()>;

    /// Stop ambient music before a game takes over the cabinet.
    fn pause_music(&mut self);

    /// Restart ambient music once the menu is back.
    fn resume_music(&mut self);
}
