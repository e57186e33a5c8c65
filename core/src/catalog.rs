//! Game catalog management
//!
//! The catalog is a plain-text file of comma-separated rows, one per
//! installed game, living next to the games directory:
//!
//! ```text
//! name,runtime,input
//! Pong,Python,joystick
//! Breakout,Java,buttons
//! ```
//!
//! The first line is a header. Each game's files live in a directory named
//! after it under the games root; a `description.txt` in that directory is
//! shown in the menu's side panel.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File read from a game's directory for the menu side panel.
pub const DESCRIPTION_FILE: &str = "description.txt";

/// Runtime used to launch a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runtime {
    Python,
    Java,
    /// Anything the launcher does not know how to run. Carries the raw
    /// catalog value so launch errors can name it.
    Other(String),
}

impl Runtime {
    /// Parse a catalog runtime field. Matching is exact; unknown values are
    /// preserved as [`Runtime::Other`] and rejected at launch time, not here.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Python" => Runtime::Python,
            "Java" => Runtime::Java,
            other => Runtime::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runtime::Python => write!(f, "Python"),
            Runtime::Java => write!(f, "Java"),
            Runtime::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// An installed game as described by one catalog row.
#[derive(Debug, Clone)]
pub struct GameEntry {
    /// Row position in the catalog file (1-based, stable across reloads)
    pub id: u32,
    /// Display name; also the game's directory name and, for Java games,
    /// the main class to execute
    pub name: String,
    /// Free text from the game's `description.txt`, empty if absent
    pub description: String,
    /// Directory holding the game's files; the child process runs with this
    /// as its working directory
    pub dir: PathBuf,
    /// How to launch the game
    pub runtime: Runtime,
    /// Control layout hint for the cabinet hardware ("joystick", "buttons", ...)
    pub input_profile: String,
}

/// Ordered, immutable list of installed games.
///
/// Loaded once at startup and passed by reference into the selection state
/// machine and the launch supervisor.
#[derive(Debug, Clone, Default)]
pub struct GameCatalog {
    entries: Vec<GameEntry>,
}

impl GameCatalog {
    /// Build a catalog from already-constructed entries.
    pub fn from_entries(entries: Vec<GameEntry>) -> Self {
        Self { entries }
    }

    /// Load the catalog file, resolving each game's directory under
    /// `games_root`.
    ///
    /// The header line is skipped. Rows with fewer than three fields are
    /// skipped with a warning but keep their row id reserved, so ids always
    /// match file positions.
    pub fn load(catalog_path: &Path, games_root: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(catalog_path)
            .with_context(|| format!("failed to read catalog {}", catalog_path.display()))?;

        Ok(Self::from_catalog_text(&content, games_root))
    }

    /// Internal: parse catalog text. Extracted for testability.
    fn from_catalog_text(content: &str, games_root: &Path) -> Self {
        let entries = content
            .lines()
            .skip(1)
            .enumerate()
            .filter_map(|(row, line)| {
                let id = (row + 1) as u32;
                if line.trim().is_empty() {
                    return None;
                }

                let fields: Vec<&str> = line.split(',').map(str::trim).collect();
                if fields.len() < 3 {
                    tracing::warn!("catalog row {} has {} fields, skipping", id, fields.len());
                    return None;
                }

                let name = fields[0].to_string();
                let dir = games_root.join(&name);
                let description = read_description(&dir);

                Some(GameEntry {
                    id,
                    name,
                    description,
                    dir,
                    runtime: Runtime::parse(fields[1]),
                    input_profile: fields[2].to_string(),
                })
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GameEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }
}

fn read_description(game_dir: &Path) -> String {
    std::fs::read_to_string(game_dir.join(DESCRIPTION_FILE))
        .map(|text| text.trim_end().to_string())
        .unwrap_or_default()
}
