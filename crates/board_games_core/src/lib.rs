//! Board games core - turn-based grid game logic
//!
//! This crate holds everything needed to play a two-player grid game without
//! a console: the board, move history, the player capability and its variants,
//! the rule sets for Connect Four and Tic-Tac-Toe, and the game state machine.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of optional occupants with a glyph formatter
//! - **Rules**: placement rule and win predicate per game variant
//! - **Players**: humans reading a [`Terminal`], and computer opponents
//! - **Game**: owns board, players and history; runs the turn loop
//!
//! # Example
//!
//! ```
//! use board_games_core::{Game, Phase, Position, Variant};
//!
//! # fn example() -> Result<(), board_games_core::GameError> {
//! let mut game = Game::for_variant(Variant::TicTacToe)?;
//! # use board_games_core::{Human, PlayerId};
//! game.add_player(Box::new(Human::new(PlayerId::new(1))))?;
//! game.add_player(Box::new(Human::new(PlayerId::new(2))))?;
//!
//! let phase = game.submit(Position::new(1, 1))?;
//! assert_eq!(phase, Phase::AwaitingMove { active: 1 });
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod history;
mod players;
mod position;
mod rules;
mod terminal;
mod types;

// Crate-level exports - Board
pub use board::{Board, BoardError, GlyphFormatter};

// Crate-level exports - Game state machine
pub use game::{FinishedGame, Game, GameError, GameEvent, Outcome, Phase};

// Crate-level exports - History
pub use history::{History, HistoryEntry};

// Crate-level exports - Players
pub use players::{
    ChuckNorris, Human, Player, PlayerError, PlayerKind, SmartAi, StupidAi, TurnContext,
};

// Crate-level exports - Positions
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{ConnectFour, DropPosition, MoveError, Rules, TicTacToe};

// Crate-level exports - Console collaborator
pub use terminal::{ScriptedTerminal, Terminal};

// Crate-level exports - Shared types
pub use types::{PlayerId, Variant};
