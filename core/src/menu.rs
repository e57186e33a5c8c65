//! Menu selection state machine.
//!
//! Owns the highlighted catalog index and the exit-confirmation dialog. The
//! state machine never performs side effects itself: launching and process
//! termination are signalled to the caller through [`MenuCommand`].

use crate::catalog::GameCatalog;
use crate::input::InputFrame;

/// Which screen of the menu is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Scrolling through the game list.
    Browsing,
    /// "Leave the kiosk?" dialog is up.
    ConfirmingExit,
}

/// Instruction for the caller, produced by [`Selection::confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Launch the catalog entry at this index.
    Launch(usize),
    /// Player confirmed leaving; shut the kiosk down.
    Quit,
}

/// Selection state over an immutable catalog.
///
/// Navigation wraps modulo the catalog length in both directions. With an
/// empty catalog every navigation is a no-op, but the exit dialog still
/// works, so an operator can always shut the cabinet down from the controls.
#[derive(Debug, Clone)]
pub struct Selection {
    len: usize,
    highlighted: usize,
    mode: MenuMode,
    exit_choice_yes: bool,
}

impl Selection {
    /// Start browsing at the top of the catalog.
    ///
    /// The catalog is immutable after load, so its length is captured here.
    pub fn new(catalog: &GameCatalog) -> Self {
        Self {
            len: catalog.len(),
            highlighted: 0,
            mode: MenuMode::Browsing,
            exit_choice_yes: false,
        }
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    /// Current dialog choice; meaningful only in [`MenuMode::ConfirmingExit`].
    pub fn exit_choice_is_yes(&self) -> bool {
        self.exit_choice_yes
    }

    /// Move the highlight one entry up, wrapping from the first to the last.
    pub fn navigate_up(&mut self) {
        if self.mode == MenuMode::Browsing && self.len > 0 {
            self.highlighted = (self.highlighted + self.len - 1) % self.len;
        }
    }

    /// Move the highlight one entry down, wrapping from the last to the first.
    pub fn navigate_down(&mut self) {
        if self.mode == MenuMode::Browsing && self.len > 0 {
            self.highlighted = (self.highlighted + 1) % self.len;
        }
    }

    /// In the exit dialog, pick "No". Ignored while browsing.
    pub fn navigate_left(&mut self) {
        if self.mode == MenuMode::ConfirmingExit {
            self.exit_choice_yes = false;
        }
    }

    /// In the exit dialog, pick "Yes". Ignored while browsing.
    pub fn navigate_right(&mut self) {
        if self.mode == MenuMode::ConfirmingExit {
            self.exit_choice_yes = true;
        }
    }

    /// Open the exit dialog, defaulting to "No".
    pub fn request_exit(&mut self) {
        if self.mode == MenuMode::Browsing {
            self.mode = MenuMode::ConfirmingExit;
            self.exit_choice_yes = false;
        }
    }

    /// Act on the primary button.
    ///
    /// Browsing: asks the caller to launch the highlighted entry (nothing to
    /// launch with an empty catalog). Exit dialog: "Yes" asks the caller to
    /// quit, "No" dismisses the dialog.
    pub fn confirm(&mut self) -> Option<MenuCommand> {
        match self.mode {
            MenuMode::Browsing => (self.len > 0).then_some(MenuCommand::Launch(self.highlighted)),
            MenuMode::ConfirmingExit => {
                if self.exit_choice_yes {
                    Some(MenuCommand::Quit)
                } else {
                    self.mode = MenuMode::Browsing;
                    None
                }
            }
        }
    }

    /// Apply one tick's input frame, returning any resulting command.
    pub fn apply(&mut self, frame: &InputFrame) -> Option<MenuCommand> {
        if frame.up {
            self.navigate_up();
        }
        if frame.down {
            self.navigate_down();
        }
        if frame.left {
            self.navigate_left();
        }
        if frame.right {
            self.navigate_right();
        }
        if frame.quit {
            self.request_exit();
        }
        if frame.confirm {
            return self.confirm();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{GameEntry, Runtime};
    use std::path::PathBuf;

    fn catalog_of(n: usize) -> GameCatalog {
        let entries = (0..n)
            .map(|i| GameEntry {
                id: (i + 1) as u32,
                name: format!("game-{}", i + 1),
                description: String::new(),
                dir: PathBuf::from(format!("games/game-{}", i + 1)),
                runtime: Runtime::Python,
                input_profile: "joystick".to_string(),
            })
            .collect();
        GameCatalog::from_entries(entries)
    }

    #[test]
    fn navigate_down_wraps_around_after_full_cycle() {
        for n in 1..6 {
            let mut selection = Selection::new(&catalog_of(n));
            for start in 0..n {
                // Walk to the starting position, then do one full cycle.
                while selection.highlighted() != start {
                    selection.navigate_down();
                }
                for _ in 0..n {
                    selection.navigate_down();
                }
                assert_eq!(selection.highlighted(), start, "catalog of {}", n);
            }
        }
    }

    #[test]
    fn navigate_up_then_down_returns_to_start() {
        let mut selection = Selection::new(&catalog_of(5));
        for _ in 0..5 {
            let start = selection.highlighted();
            selection.navigate_up();
            selection.navigate_down();
            assert_eq!(selection.highlighted(), start);
            selection.navigate_down();
        }
    }

    #[test]
    fn navigate_up_from_top_wraps_to_last() {
        let mut selection = Selection::new(&catalog_of(3));
        assert_eq!(selection.highlighted(), 0);
        selection.navigate_up();
        assert_eq!(selection.highlighted(), 2);
    }

    #[test]
    fn empty_catalog_makes_navigation_a_no_op() {
        let mut selection = Selection::new(&catalog_of(0));
        selection.navigate_up();
        selection.navigate_down();
        assert_eq!(selection.highlighted(), 0);
        assert_eq!(selection.confirm(), None);
    }

    #[test]
    fn empty_catalog_still_allows_quitting() {
        let mut selection = Selection::new(&catalog_of(0));
        selection.request_exit();
        selection.navigate_right();
        assert_eq!(selection.confirm(), Some(MenuCommand::Quit));
    }

    #[test]
    fn confirm_while_browsing_requests_launch_of_highlighted() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.navigate_down();
        assert_eq!(selection.confirm(), Some(MenuCommand::Launch(1)));
        // Launching does not change the menu state.
        assert_eq!(selection.mode(), MenuMode::Browsing);
        assert_eq!(selection.highlighted(), 1);
    }

    #[test]
    fn exit_dialog_defaults_to_no() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.request_exit();
        assert_eq!(selection.mode(), MenuMode::ConfirmingExit);
        assert!(!selection.exit_choice_is_yes());
    }

    #[test]
    fn exit_dialog_no_returns_to_browsing() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.navigate_down();
        selection.request_exit();
        selection.navigate_right();
        selection.navigate_left();
        assert_eq!(selection.confirm(), None);
        assert_eq!(selection.mode(), MenuMode::Browsing);
        // The highlight survives the dialog round trip.
        assert_eq!(selection.highlighted(), 1);
    }

    #[test]
    fn exit_dialog_yes_requests_quit() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.request_exit();
        selection.navigate_right();
        assert_eq!(selection.confirm(), Some(MenuCommand::Quit));
    }

    #[test]
    fn navigation_is_frozen_while_dialog_is_up() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.request_exit();
        selection.navigate_up();
        selection.navigate_down();
        assert_eq!(selection.highlighted(), 0);
    }

    #[test]
    fn reopening_dialog_resets_choice_to_no() {
        let mut selection = Selection::new(&catalog_of(3));
        selection.request_exit();
        selection.navigate_right();
        assert_eq!(selection.confirm(), Some(MenuCommand::Quit));
        // Caller chose not to act on Quit; dismiss by choosing No instead.
        selection.navigate_left();
        selection.confirm();
        selection.request_exit();
        assert!(!selection.exit_choice_is_yes());
    }

    #[test]
    fn apply_routes_navigation_and_confirm() {
        let mut selection = Selection::new(&catalog_of(3));

        let down = InputFrame {
            down: true,
            ..InputFrame::default()
        };
        assert_eq!(selection.apply(&down), None);
        assert_eq!(selection.highlighted(), 1);

        let confirm = InputFrame {
            confirm: true,
            ..InputFrame::default()
        };
        assert_eq!(selection.apply(&confirm), Some(MenuCommand::Launch(1)));
    }

    #[test]
    fn apply_quit_then_confirm_sequence_exits() {
        let mut selection = Selection::new(&catalog_of(3));

        let quit = InputFrame {
            quit: true,
            ..InputFrame::default()
        };
        assert_eq!(selection.apply(&quit), None);
        assert_eq!(selection.mode(), MenuMode::ConfirmingExit);

        let right = InputFrame {
            right: true,
            ..InputFrame::default()
        };
        selection.apply(&right);

        let confirm = InputFrame {
            confirm: true,
            ..InputFrame::default()
        };
        assert_eq!(selection.apply(&confirm), Some(MenuCommand::Quit));
    }

    #[test]
    fn apply_ignores_cancel() {
        let mut selection = Selection::new(&catalog_of(3));
        let cancel = InputFrame {
            cancel: true,
            ..InputFrame::default()
        };
        assert_eq!(selection.apply(&cancel), None);
        assert_eq!(selection.mode(), MenuMode::Browsing);
        assert_eq!(selection.highlighted(), 0);
    }
}
