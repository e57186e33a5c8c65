//! Control-panel input: keyboard and optional gamepad.
//!
//! One frame per tick. Keyboard events come from crossterm with a poll
//! timeout, so an idle cabinet produces empty frames at the configured tick
//! rate instead of blocking. Gamepad button edges are folded into the same
//! frame.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use coinop_core::{InputFrame, InputSource};

pub struct CabinetInput {
    poll_timeout: Duration,
    /// Gilrs context for gamepad handling (None if initialization failed)
    #[cfg(feature = "gamepad")]
    gilrs: Option<gilrs::Gilrs>,
}

impl CabinetInput {
    pub fn new(tick_ms: u64) -> Self {
        #[cfg(feature = "gamepad")]
        let gilrs = match gilrs::Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize gamepad support: {}. Gamepads will not be available.",
                    e
                );
                None
            }
        };

        Self {
            poll_timeout: Duration::from_millis(tick_ms),
            #[cfg(feature = "gamepad")]
            gilrs,
        }
    }

    /// Fold gamepad button edges since the last tick into the frame.
    #[cfg(feature = "gamepad")]
    fn merge_gamepad(&mut self, frame: &mut InputFrame) {
        use gilrs::{Button, EventType};

        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };
        while let Some(event) = gilrs.next_event() {
            if let EventType::ButtonPressed(button, _) = event.event {
                match button {
                    Button::DPadUp => frame.up = true,
                    Button::DPadDown => frame.down = true,
                    Button::DPadLeft => frame.left = true,
                    Button::DPadRight => frame.right = true,
                    // South=A in Xbox layout
                    Button::South => frame.confirm = true,
                    Button::East => frame.cancel = true,
                    Button::Start => frame.quit = true,
                    _ => {}
                }
            }
        }
    }
}

impl InputSource for CabinetInput {
    fn next_frame(&mut self) -> Result<InputFrame> {
        let mut frame = InputFrame::default();

        // Poll for keyboard input with timeout; only key presses count.
        if event::poll(self.poll_timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Up => frame.up = true,
                KeyCode::Down => frame.down = true,
                KeyCode::Left => frame.left = true,
                KeyCode::Right => frame.right = true,
                KeyCode::Enter | KeyCode::Char(' ') => frame.confirm = true,
                KeyCode::Backspace => frame.cancel = true,
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => frame.quit = true,
                _ => {}
            }
        }

        #[cfg(feature = "gamepad")]
        self.merge_gamepad(&mut frame);

        Ok(frame)
    }
}
