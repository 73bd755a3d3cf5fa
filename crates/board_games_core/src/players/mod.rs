//! Player trait and implementations.

mod chuck_norris;
mod human;
mod smart_ai;
mod stupid_ai;

pub use chuck_norris::ChuckNorris;
pub use human::Human;
pub use smart_ai::SmartAi;
pub use stupid_ai::StupidAi;

use crate::board::Board;
use crate::history::History;
use crate::position::Position;
use crate::rules::Rules;
use crate::terminal::Terminal;
use crate::types::PlayerId;
use derive_more::{Display, Error, From};

/// Whether a player is a person at the console or a computer opponent.
///
/// Illegal moves are reported to humans and silently retried for computers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PlayerKind {
    /// Reads moves from the terminal.
    Human,
    /// Chooses moves without input.
    Computer,
}

/// Errors a player can raise while choosing a move.
#[derive(Debug, Display, Error, From)]
pub enum PlayerError {
    /// The requested player variant does not exist yet.
    #[display("{what} hasn't been implemented yet.")]
    Unimplemented {
        /// Name of the missing capability.
        what: &'static str,
    },

    /// The terminal has no more input.
    #[display("Input closed before a move was chosen")]
    InputClosed,

    /// A computer player found no legal move.
    #[display("No legal move available")]
    NoLegalMove,

    /// Reading from or writing to the terminal failed.
    #[display("Terminal I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),
}

/// Read-only view of the game handed to a player when it is asked to move.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct TurnContext<'a> {
    board: &'a Board,
    history: &'a History,
    rules: &'a dyn Rules,
    me: PlayerId,
    opponent: PlayerId,
}

impl<'a> TurnContext<'a> {
    /// Current board.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Moves played so far.
    pub fn history(&self) -> &'a History {
        self.history
    }

    /// Rule set of the running game.
    pub fn rules(&self) -> &'a dyn Rules {
        self.rules
    }

    /// The player being asked to move.
    pub fn me(&self) -> PlayerId {
        self.me
    }

    /// The other player.
    pub fn opponent(&self) -> PlayerId {
        self.opponent
    }
}

/// Something that can produce the next move of a game.
pub trait Player: std::fmt::Debug {
    /// The player's id, which is also its board occupant.
    fn id(&self) -> PlayerId;

    /// Display name used in status lines.
    fn name(&self) -> &str;

    /// Human or computer.
    fn kind(&self) -> PlayerKind;

    /// Produces the requested move, or `None` when there is no move yet
    /// and the game should ask again.
    ///
    /// The returned position only has to be well-formed; legality is
    /// checked by the game.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayerError`] when no move can ever be produced, which
    /// ends the game session.
    fn next_position(
        &mut self,
        ctx: &TurnContext<'_>,
        terminal: &mut dyn Terminal,
    ) -> Result<Option<Position>, PlayerError>;
}
