//! Kiosk configuration (`<config dir>/coinop/coinop.toml`)
//!
//! Handles loading and providing defaults for cabinet settings. Settings are
//! stored in TOML format in the platform-specific config directory. The kiosk
//! never writes this file; operators edit it by hand on the cabinet image.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::launch::LaunchConfig;

/// Cabinet configuration.
///
/// Contains all operator-configurable settings organized into sections.
/// Every field has a default so a missing or partial file always yields a
/// usable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Where the game library lives
    #[serde(default)]
    pub paths: PathsConfig,
    /// Launcher commands and support files
    #[serde(default)]
    pub launch: LaunchConfig,
    /// Input poll interval in milliseconds (default: 16)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Filesystem layout of the game library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per game (default: `games`)
    #[serde(default = "default_games_dir")]
    pub games_dir: PathBuf,
    /// Catalog file listing the installed games (default: `games.csv`)
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
}

fn default_games_dir() -> PathBuf {
    PathBuf::from("games")
}
fn default_catalog() -> PathBuf {
    PathBuf::from("games.csv")
}
fn default_tick_ms() -> u64 {
    16
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            launch: LaunchConfig::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            games_dir: default_games_dir(),
            catalog: default_catalog(),
        }
    }
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\Coinop\config`
/// On macOS: `~/Library/Application Support/io.coinop.Coinop`
/// On Linux: `~/.config/coinop`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.coinop", "", "Coinop")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the path of the cabinet configuration file.
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("coinop.toml"))
}

/// Loads the configuration from the platform config directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> KioskConfig {
    match config_path() {
        Some(path) => load_from(&path),
        None => KioskConfig::default(),
    }
}

/// Loads the configuration from an explicit path.
///
/// A missing file is normal (fresh cabinet image) and silently yields
/// defaults. A file that exists but doesn't parse is an operator mistake,
/// so it is logged before falling back to defaults; the kiosk must come up
/// either way.
pub fn load_from(path: &Path) -> KioskConfig {
    let Ok(content) = std::fs::read_to_string(path) else {
        return KioskConfig::default();
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("ignoring malformed config {}: {}", path.display(), err);
            KioskConfig::default()
        }
    }
}
