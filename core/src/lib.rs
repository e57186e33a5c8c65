//! Coinop Core - Arcade cabinet kiosk logic
//!
//! This crate provides the machinery behind a coin-op cabinet's menu:
//! browsing a game catalog, launching games as child processes, and keeping
//! per-game high-score boards.
//!
//! # Architecture
//!
//! - [`GameCatalog`] - Ordered, immutable list of installed games
//! - [`Selection`] - Menu state machine (browsing + exit confirmation)
//! - [`LaunchSupervisor`] - Spawns a game process and blocks until it exits
//! - [`score`] - High-score ledger file format, ranking, and name entry
//! - [`Kiosk`] - Tick-loop driver wiring the pieces to input/frontend
//!   collaborators

pub mod catalog;
pub mod config;
pub mod frontend;
pub mod input;
pub mod kiosk;
pub mod launch;
pub mod menu;
pub mod score;

// Re-export the main types
pub use catalog::{GameCatalog, GameEntry, Runtime};
pub use config::KioskConfig;
pub use frontend::{Frontend, MenuView, NameEntryView};
pub use input::{InputFrame, InputSource};
pub use kiosk::Kiosk;
pub use launch::{LaunchConfig, LaunchError, LaunchSupervisor};
pub use menu::{MenuCommand, MenuMode, Selection};
pub use score::{MAX_ENTRIES, ScoreEntry};
