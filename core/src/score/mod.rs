//! Per-game high-score ledgers.
//!
//! Each game keeps a `highscore.txt` in its own directory: one `NAME-SCORE`
//! line per entry, best score first, at most ten lines. Games append their
//! own results through this same format, so everything here is usable as a
//! library, not just from the menu.

mod name_entry;
mod submit;

pub use name_entry::{CONFIRM_MARKER, NameEntry};
pub use submit::submit_score;

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A board holds at most this many entries.
pub const MAX_ENTRIES: usize = 10;

/// Ledger file name inside a game's directory.
pub const LEDGER_FILE: &str = "highscore.txt";

/// Path of a game's ledger file.
pub fn ledger_path(game_dir: &Path) -> PathBuf {
    game_dir.join(LEDGER_FILE)
}

/// One line of a high-score board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Exactly three characters from `A-Z`, `.` or space
    pub name: String,
    pub score: u32,
}

impl ScoreEntry {
    /// Build an entry, normalizing the name to exactly three characters:
    /// short names are padded with spaces, over-long names collapse to the
    /// `"AAA"` placeholder.
    pub fn new(name: &str, score: u32) -> Self {
        let count = name.chars().count();
        let name = if count > 3 {
            "AAA".to_string()
        } else {
            let mut padded = name.to_string();
            for _ in count..3 {
                padded.push(' ');
            }
            padded
        };
        Self { name, score }
    }

    /// Parse one ledger line. `None` for anything malformed: no separator,
    /// a name that is not exactly three valid characters, or a score that
    /// is not a bare non-negative integer.
    fn parse_line(line: &str) -> Option<Self> {
        let (name, score) = line.split_once('-')?;
        if name.chars().count() != 3 {
            return None;
        }
        if !name.chars().all(|c| c.is_ascii_uppercase() || c == '.' || c == ' ') {
            return None;
        }
        let score: u32 = score.parse().ok()?;
        Some(Self {
            name: name.to_string(),
            score,
        })
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.score)
    }
}

/// Read a board, best first.
///
/// Never fails: a missing or unreadable file is an empty board, and
/// malformed lines are dropped without comment. Corruption must not be able
/// to take the menu down.
pub fn load(path: &Path) -> Vec<ScoreEntry> {
    let Ok(content) = fs::read_to_string(path) else {
        return vec![];
    };

    content.lines().filter_map(ScoreEntry::parse_line).collect()
}

/// 0-based insertion position for `score` in a board sorted best-first.
///
/// Scans from the top and stops at the first entry scoring strictly below
/// `score`, so a tie slots in below the incumbent. A score worse than
/// everything on a full board ranks at `entries.len()`.
pub fn rank(entries: &[ScoreEntry], score: u32) -> usize {
    entries
        .iter()
        .position(|entry| entry.score < score)
        .unwrap_or(entries.len())
}

/// Whether `score` would make it onto this board.
pub fn qualifies(entries: &[ScoreEntry], score: u32) -> bool {
    rank(entries, score) < MAX_ENTRIES
}

/// Insert a result into the board at `path` and rewrite the file.
///
/// The board is reloaded, the entry inserted at its rank, the tail truncated
/// to [`MAX_ENTRIES`], and the whole file rewritten through a temp-file
/// rename. Lines are newline-joined with no trailing newline. Calling this
/// twice with the same result records it twice; at-most-once per game
/// session is the caller's job.
pub fn insert_and_persist(path: &Path, name: &str, score: u32) -> io::Result<()> {
    let mut entries = load(path);
    let position = rank(&entries, score);
    entries.insert(position, ScoreEntry::new(name, score));
    entries.truncate(MAX_ENTRIES);
    write_board(path, &entries)
}

fn write_board(path: &Path, entries: &[ScoreEntry]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = match path.file_name() {
        Some(name) => {
            let mut tmp_name = OsString::from(name);
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "ledger path has no file name",
            ));
        }
    };

    let lines: Vec<String> = entries.iter().map(ScoreEntry::to_string).collect();

    {
        let mut f = fs::File::create(&tmp_path)?;
        f.write_all(lines.join("\n").as_bytes())?;
        f.sync_all()?;
    }

    #[cfg(windows)]
    {
        if path.exists() {
            // Windows rename fails if destination exists.
            fs::remove_file(path)?;
        }
    }

    fs::rename(&tmp_path, path)
}
