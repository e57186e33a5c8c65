//! Game process launching and command building.
//!
//! One game at a time: the supervisor spawns the child with inherited
//! standard streams and blocks until it exits. The menu is fully suspended
//! for the game's duration; there is no timeout and no way to cancel short
//! of the child exiting on its own.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use serde::{Deserialize, Serialize};

use crate::catalog::{GameEntry, Runtime};

/// Why a launch attempt failed. Fatal to the attempt, never to the kiosk:
/// callers log these and put the menu back up.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The catalog declares a runtime this cabinet cannot run.
    #[error("unsupported runtime '{0}'")]
    UnsupportedRuntime(String),

    /// The child process could not be created (missing interpreter,
    /// permissions, bad game directory).
    #[error("failed to start game process: {0}")]
    SpawnFailed(io::Error),

    /// The child was spawned but waiting on it failed.
    #[error("failed waiting for game process: {0}")]
    WaitFailed(io::Error),
}

/// Launcher commands and support files, from the `[launch]` config section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Interpreter for Python games (default: `python`)
    #[serde(default = "default_python_command")]
    pub python_command: String,
    /// Entry-point file of every Python game, relative to its directory
    #[serde(default = "default_python_entry")]
    pub python_entry: String,
    /// Launcher for Java games (default: `java`)
    #[serde(default = "default_java_command")]
    pub java_command: String,
    /// Shared library archive every Java game is compiled against
    #[serde(default = "default_java_archive")]
    pub java_archive: String,
}

fn default_python_command() -> String {
    "python".to_string()
}
fn default_python_entry() -> String {
    "src/__main__.py".to_string()
}
fn default_java_command() -> String {
    "java".to_string()
}
fn default_java_archive() -> String {
    "MG2D.jar".to_string()
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            python_command: default_python_command(),
            python_entry: default_python_entry(),
            java_command: default_java_command(),
            java_archive: default_java_archive(),
        }
    }
}

/// Runs games as child processes, one at a time.
pub struct LaunchSupervisor {
    config: LaunchConfig,
}

impl LaunchSupervisor {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// Run `entry`'s game and block until it exits.
    ///
    /// The child runs with the game's absolute directory as its working
    /// directory (games load assets by relative path) and inherits the
    /// kiosk's standard streams, so game output and crashes land on the
    /// cabinet console. The exit status is surfaced but not interpreted;
    /// any exit is "the game finished".
    ///
    /// Callers are responsible for pausing ambient music before this call
    /// and resuming it unconditionally afterwards.
    pub fn launch(&self, entry: &GameEntry) -> Result<ExitStatus, LaunchError> {
        if let Runtime::Other(raw) = &entry.runtime {
            // Checked before any path work so an unknown runtime can never
            // surface as a spawn failure.
            return Err(LaunchError::UnsupportedRuntime(raw.clone()));
        }

        let game_dir = std::path::absolute(&entry.dir).map_err(LaunchError::SpawnFailed)?;
        let mut cmd = self.build_command(entry, &game_dir)?;

        tracing::info!(
            "launching '{}' ({}) in {}",
            entry.name,
            entry.runtime,
            game_dir.display()
        );

        let mut child = cmd.spawn().map_err(LaunchError::SpawnFailed)?;
        let status = child.wait().map_err(LaunchError::WaitFailed)?;

        if let Some(code) = status.code()
            && code != 0
        {
            // Nonzero exits are normal for games that quit from their own
            // menus; worth a trace, not a warning.
            tracing::debug!("'{}' exited with code {}", entry.name, code);
        }

        Ok(status)
    }

    /// Internal: build the command line for an entry. Extracted for
    /// testability.
    fn build_command(&self, entry: &GameEntry, game_dir: &Path) -> Result<Command, LaunchError> {
        let mut cmd = match &entry.runtime {
            Runtime::Python => {
                let mut cmd = Command::new(&self.config.python_command);
                cmd.arg(&self.config.python_entry);
                cmd
            }
            Runtime::Java => {
                let archive = std::path::absolute(&self.config.java_archive)
                    .map_err(LaunchError::SpawnFailed)?;
                let separator = if cfg!(windows) { ";" } else { ":" };
                let classpath = format!(
                    ".{sep}{}{sep}{}",
                    archive.display(),
                    game_dir.display(),
                    sep = separator
                );

                let mut cmd = Command::new(&self.config.java_command);
                cmd.arg("-cp").arg(classpath).arg(&entry.name);
                cmd
            }
            Runtime::Other(raw) => {
                return Err(LaunchError::UnsupportedRuntime(raw.clone()));
            }
        };

        cmd.current_dir(game_dir);
        Ok(cmd)
    }
}
