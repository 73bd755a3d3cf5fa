//! Command-line interface for board_games.

use board_games_core::Variant;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::menu::Opponent;

/// Board Games - Connect Four and Tic-Tac-Toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "board_games")]
#[command(about = "Play Connect Four or Tic-Tac-Toe against a human or a simple AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "board_games.toml")]
    pub config: PathBuf,

    /// Play one game of this kind instead of showing the main menu
    #[arg(short, long, value_enum)]
    pub game: Option<GameArg>,

    /// Opponent for the second seat, skipping the opponent menu
    #[arg(short, long, value_enum)]
    pub opponent: Option<OpponentArg>,

    /// Seed for the stupid AI, overriding the settings file
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Game selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameArg {
    /// Seven by six, gravity, four in a row
    ConnectFour,
    /// Three by three, three in a row
    TicTacToe,
}

impl From<GameArg> for Variant {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::ConnectFour => Variant::ConnectFour,
            GameArg::TicTacToe => Variant::TicTacToe,
        }
    }
}

/// Opponent selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OpponentArg {
    /// Another person at the same keyboard
    Human,
    /// Random moves
    Stupid,
    /// Wins, blocks, or plays centre
    Smart,
    /// Not implemented yet
    ChuckNorris,
}

impl From<OpponentArg> for Opponent {
    fn from(arg: OpponentArg) -> Self {
        match arg {
            OpponentArg::Human => Opponent::Human,
            OpponentArg::Stupid => Opponent::StupidAi,
            OpponentArg::Smart => Opponent::SmartAi,
            OpponentArg::ChuckNorris => Opponent::ChuckNorris,
        }
    }
}
