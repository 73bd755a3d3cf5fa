//! Shared identifiers for players and game variants.

use crate::board::GlyphFormatter;
use crate::rules::{ConnectFour, Rules, TicTacToe};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identifying number of a player (1, 2, ...).
///
/// Board cells and history entries refer to players by id rather than
/// holding the player itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("{_0}")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id from its number.
    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    /// Returns the player's number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index of this player in glyph tables and player lists.
    pub fn index(self) -> usize {
        usize::from(self.0.saturating_sub(1))
    }
}

/// The games this crate knows how to play.
///
/// Declaration order matches the main menu numbering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Variant {
    /// Seven columns, six rows, pieces fall to the lowest free row.
    #[strum(to_string = "Connect Four")]
    ConnectFour,
    /// Three by three, any free cell.
    #[strum(to_string = "Tic Tac Toe")]
    TicTacToe,
}

impl Variant {
    /// Builds the rule set for this variant.
    ///
    /// `formatter` overrides the default glyphs when given.
    #[instrument]
    pub fn rules(self, formatter: Option<GlyphFormatter>) -> Box<dyn Rules> {
        match (self, formatter) {
            (Variant::ConnectFour, None) => Box::new(ConnectFour::new()),
            (Variant::ConnectFour, Some(f)) => Box::new(ConnectFour::with_formatter(f)),
            (Variant::TicTacToe, None) => Box::new(TicTacToe::new()),
            (Variant::TicTacToe, Some(f)) => Box::new(TicTacToe::with_formatter(f)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_index_is_zero_based() {
        assert_eq!(PlayerId::new(1).index(), 0);
        assert_eq!(PlayerId::new(2).index(), 1);
    }

    #[test]
    fn test_variant_menu_order() {
        let names: Vec<String> = Variant::iter().map(|v| v.to_string()).collect();
        assert_eq!(names, ["Connect Four", "Tic Tac Toe"]);
    }

    #[test]
    fn test_variant_rules_dimensions() {
        let c4 = Variant::ConnectFour.rules(None);
        assert_eq!((c4.width(), c4.height()), (7, 6));

        let ttt = Variant::TicTacToe.rules(None);
        assert_eq!((ttt.width(), ttt.height()), (3, 3));
    }
}
