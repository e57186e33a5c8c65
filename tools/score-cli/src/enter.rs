//! Enter command - arcade-style interactive name entry
//!
//! Drives the same submission flow as the cabinet, with the keyboard as the
//! control panel and a single status line as the display. Useful for testing
//! the flow and for hand-entering scores from a tournament sheet.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use coinop_core::score::{self, submit_score};
use coinop_core::{Frontend, InputFrame, InputSource, MenuView, NameEntryView};

use crate::show;

/// Arguments for the enter command
#[derive(Args)]
pub struct EnterArgs {
    /// Game name (directory under the games dir)
    pub game: String,

    /// Score to submit
    pub score: u32,
}

/// Execute the enter command
pub fn execute(games_dir: &Path, args: EnterArgs) -> Result<()> {
    let path = score::ledger_path(&games_dir.join(&args.game));

    let recorded = {
        let _guard = RawModeGuard::enable()?;
        let mut input = KeyboardInput;
        let mut prompt = LinePrompt {
            stdout: io::stdout(),
        };
        submit_score(&path, args.score, &mut input, &mut prompt)?
    };

    println!();
    if recorded {
        show::print_board(&args.game, &score::load(&path));
    } else {
        println!(
            "Score {} does not make the board for {}",
            args.score, args.game
        );
    }
    Ok(())
}

/// Puts the terminal in raw mode for the duration of the prompt.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Blocking keyboard reads mapped to cabinet input frames.
struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn next_frame(&mut self) -> Result<InputFrame> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let mut frame = InputFrame::default();
            match key.code {
                KeyCode::Up => frame.up = true,
                KeyCode::Down => frame.down = true,
                KeyCode::Left => frame.left = true,
                KeyCode::Right => frame.right = true,
                KeyCode::Enter => frame.confirm = true,
                KeyCode::Esc => bail!("name entry aborted"),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    bail!("name entry aborted");
                }
                _ => continue,
            }
            return Ok(frame);
        }
    }
}

/// One-line rendering of the name editor, redrawn in place with `\r`.
struct LinePrompt {
    stdout: io::Stdout,
}

impl Frontend for LinePrompt {
    fn show_menu(&mut self, _view: &MenuView<'_>) -> Result<()> {
        // The submission flow never shows the menu.
        Ok(())
    }

    fn show_name_entry(&mut self, view: &NameEntryView) -> Result<()> {
        let mut line = format!("\rScore {:>8}   ", view.score);
        for (i, c) in view.slots.iter().enumerate() {
            if i == view.cursor {
                line.push('[');
                line.push(*c);
                line.push(']');
            } else {
                line.push(' ');
                line.push(*c);
                line.push(' ');
            }
        }
        line.push_str("  (arrows edit, Enter on # saves)");
        write!(self.stdout, "{}", line)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn pause_music(&mut self) {}

    fn resume_music(&mut self) {}
}
