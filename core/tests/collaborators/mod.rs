//! Scripted input and a recording frontend for driving kiosk flows
//! without a terminal or a real control panel.
#![allow(dead_code)]

use std::collections::VecDeque;

use anyhow::{Context, Result};
use coinop_core::{
    Frontend, InputFrame, InputSource, MenuMode, MenuView, NameEntryView, ScoreEntry,
};

/// Input source that replays a fixed list of frames.
///
/// Running out of frames is an error, so a flow that polls more input than
/// the test scripted fails loudly instead of hanging.
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_frame(&mut self) -> Result<InputFrame> {
        self.frames
            .pop_front()
            .context("script ran out of input frames")
    }
}

pub fn up() -> InputFrame {
    InputFrame {
        up: true,
        ..InputFrame::default()
    }
}
pub fn down() -> InputFrame {
    InputFrame {
        down: true,
        ..InputFrame::default()
    }
}
pub fn left() -> InputFrame {
    InputFrame {
        left: true,
        ..InputFrame::default()
    }
}
pub fn right() -> InputFrame {
    InputFrame {
        right: true,
        ..InputFrame::default()
    }
}
pub fn confirm() -> InputFrame {
    InputFrame {
        confirm: true,
        ..InputFrame::default()
    }
}
pub fn quit() -> InputFrame {
    InputFrame {
        quit: true,
        ..InputFrame::default()
    }
}

/// Owned copy of one menu frame handed to the frontend.
pub struct MenuSnapshot {
    pub highlighted: usize,
    pub mode: MenuMode,
    pub exit_choice_yes: bool,
    pub description: String,
    pub scoreboard: Vec<ScoreEntry>,
}

/// Frontend that records everything it is asked to show.
#[derive(Default)]
pub struct RecordingFrontend {
    pub menus: Vec<MenuSnapshot>,
    pub name_entries: Vec<NameEntryView>,
    pub music: Vec<&'static str>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontend for RecordingFrontend {
    fn show_menu(&mut self, view: &MenuView<'_>) -> Result<()> {
        self.menus.push(MenuSnapshot {
            highlighted: view.highlighted,
            mode: view.mode,
            exit_choice_yes: view.exit_choice_yes,
            description: view.description.to_string(),
            scoreboard: view.scoreboard.to_vec(),
        });
        Ok(())
    }

    fn show_name_entry(&mut self, view: &NameEntryView) -> Result<()> {
        self.name_entries.push(*view);
        Ok(())
    }

    fn pause_music(&mut self) {
        self.music.push("pause");
    }

    fn resume_music(&mut self) {
        self.music.push("resume");
    }
}
