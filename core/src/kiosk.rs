//! Top-level kiosk loop.
//!
//! Ties the catalog, menu state machine, launcher, and score ledgers
//! together behind the [`InputSource`] and [`Frontend`] collaborator traits.
//! The loop itself is synchronous: one input frame in, one view out, and the
//! whole thing suspends while a game owns the cabinet.

use anyhow::Result;

use crate::catalog::GameCatalog;
use crate::frontend::{Frontend, MenuView};
use crate::input::InputSource;
use crate::launch::LaunchSupervisor;
use crate::menu::{MenuCommand, Selection};
use crate::score::{self, ScoreEntry};

/// The assembled cabinet: catalog, selection state, launcher, and the
/// cached scoreboard of the highlighted game.
pub struct Kiosk {
    catalog: GameCatalog,
    selection: Selection,
    supervisor: LaunchSupervisor,
    scoreboard: Vec<ScoreEntry>,
}

impl Kiosk {
    pub fn new(catalog: GameCatalog, supervisor: LaunchSupervisor) -> Self {
        let selection = Selection::new(&catalog);
        let mut kiosk = Self {
            catalog,
            selection,
            supervisor,
            scoreboard: Vec::new(),
        };
        kiosk.refresh_scoreboard();
        kiosk
    }

    /// Run the attract-mode loop until the player confirms leaving.
    ///
    /// Launch failures are logged and swallowed; a broken game entry must
    /// not take the cabinet down with it. Errors from the collaborators
    /// (input device gone, terminal gone) do end the loop, since there is
    /// nothing left to drive the kiosk with.
    pub fn run(&mut self, input: &mut dyn InputSource, frontend: &mut dyn Frontend) -> Result<()> {
        loop {
            frontend.show_menu(&self.menu_view())?;

            let frame = input.next_frame()?;
            let before = self.selection.highlighted();
            match self.selection.apply(&frame) {
                Some(MenuCommand::Launch(index)) => {
                    self.run_game(index, frontend);
                    // The game may have written a new board while it ran.
                    self.refresh_scoreboard();
                }
                Some(MenuCommand::Quit) => {
                    tracing::info!("kiosk shutting down");
                    return Ok(());
                }
                None => {
                    if self.selection.highlighted() != before {
                        self.refresh_scoreboard();
                    }
                }
            }
        }
    }

    fn run_game(&mut self, index: usize, frontend: &mut dyn Frontend) {
        let Some(entry) = self.catalog.get(index) else {
            return;
        };
        frontend.pause_music();
        if let Err(err) = self.supervisor.launch(entry) {
            tracing::error!("could not run '{}': {}", entry.name, err);
        }
        frontend.resume_music();
    }

    /// Snapshot of the current screen for the frontend.
    fn menu_view(&self) -> MenuView<'_> {
        let highlighted = self.selection.highlighted();
        let description = self
            .catalog
            .get(highlighted)
            .map(|entry| entry.description.as_str())
            .unwrap_or("");
        MenuView {
            entries: self.catalog.entries(),
            highlighted,
            mode: self.selection.mode(),
            exit_choice_yes: self.selection.exit_choice_is_yes(),
            description,
            scoreboard: &self.scoreboard,
        }
    }

    /// Reload the highlighted game's board from disk.
    fn refresh_scoreboard(&mut self) {
        self.scoreboard = match self.catalog.get(self.selection.highlighted()) {
            Some(entry) => score::load(&score::ledger_path(&entry.dir)),
            None => Vec::new(),
        };
    }
}
