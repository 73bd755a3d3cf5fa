//! Board Games - console menu for two-player grid games
//!
//! This library wires the pure game logic of [`board_games_core`] to a
//! text console: command-line flags, a TOML settings file, and the menus
//! that pick a game and an opponent.
//!
//! # Architecture
//!
//! - **Cli**: flags to pick the settings file or skip the menus
//! - **Settings**: glyphs, AI seed and log filter from TOML
//! - **Console**: a [`Terminal`](board_games_core::Terminal) over stdio
//! - **Menu**: main menu, opponent menu, and one game session
//!
//! # Example
//!
//! ```
//! use board_games::{Menu, Settings};
//! use board_games_core::ScriptedTerminal;
//!
//! # fn example() -> anyhow::Result<()> {
//! let menu = Menu::new(Settings::default());
//! // Pick Tic Tac Toe against a human, play a left-column win, then exit.
//! let mut terminal = ScriptedTerminal::new([
//!     "2", "1", "0,0", "1,0", "0,1", "1,1", "0,2", "3",
//! ]);
//! menu.run(&mut terminal)?;
//! assert!(terminal.output().iter().any(|line| line == "Player 1 has won."));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod menu;

// Crate-level exports - Command line
pub use cli::{Cli, GameArg, OpponentArg};

// Crate-level exports - Settings
pub use config::{ConfigError, GlyphSettings, Settings};

// Crate-level exports - Console
pub use console::ConsoleTerminal;

// Crate-level exports - Menus
pub use menu::{MainChoice, Menu, Opponent, SessionEnd};
