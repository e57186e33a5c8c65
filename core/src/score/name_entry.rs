//! Three-letter name editor for the high-score board.
//!
//! Four slots: three editable letters and a fixed confirm marker. The
//! joystick moves the cursor (clamped, no wraparound, unlike the menu list)
//! and cycles the letter under it; pressing the button on the marker slot
//! commits the name.

/// Shown in the fourth slot; selecting it and confirming commits the name.
pub const CONFIRM_MARKER: char = '#';

/// Index of the confirm marker slot.
const MARKER_SLOT: usize = 3;

/// State of the name editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameEntry {
    slots: [char; 4],
    cursor: usize,
}

impl Default for NameEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl NameEntry {
    /// Fresh editor: `A` in the first slot, blanks after it, cursor on the
    /// first slot.
    pub fn new() -> Self {
        Self {
            slots: ['A', ' ', ' ', CONFIRM_MARKER],
            cursor: 0,
        }
    }

    pub fn slots(&self) -> [char; 4] {
        self.slots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor one slot left, stopping at the first slot.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one slot right, stopping at the confirm marker.
    pub fn move_right(&mut self) {
        if self.cursor < MARKER_SLOT {
            self.cursor += 1;
        }
    }

    /// Advance the letter under the cursor (`A..Z`, `.`, space, back to `A`).
    /// No-op on the marker slot.
    pub fn cycle_up(&mut self) {
        if self.cursor < MARKER_SLOT {
            self.slots[self.cursor] = next_char(self.slots[self.cursor]);
        }
    }

    /// Step the letter under the cursor backward. No-op on the marker slot.
    pub fn cycle_down(&mut self) {
        if self.cursor < MARKER_SLOT {
            self.slots[self.cursor] = previous_char(self.slots[self.cursor]);
        }
    }

    /// The three editable letters as entered so far.
    pub fn name(&self) -> String {
        self.slots[..MARKER_SLOT].iter().collect()
    }

    /// Commit if the cursor is on the marker slot; `None` otherwise.
    pub fn confirm(&self) -> Option<String> {
        (self.cursor == MARKER_SLOT).then(|| self.name())
    }
}

fn next_char(c: char) -> char {
    match c {
        'A'..='Y' => (c as u8 + 1) as char,
        'Z' => '.',
        '.' => ' ',
        _ => 'A',
    }
}

fn previous_char(c: char) -> char {
    match c {
        'B'..='Z' => (c as u8 - 1) as char,
        'A' => ' ',
        ' ' => '.',
        _ => 'Z',
    }
}
