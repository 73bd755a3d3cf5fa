//! Tic-tac-toe: three by three, any empty cell, three in a line wins.

use super::{MoveError, Rules};
use crate::board::{Board, GlyphFormatter};
use crate::position::Position;
use crate::types::{PlayerId, Variant};
use tracing::instrument;

/// Winning lines as `(x, y)` triples.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Tic-tac-toe rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    formatter: GlyphFormatter,
}

impl TicTacToe {
    /// Board side length.
    pub const SIZE: usize = 3;

    /// Creates the rules with the default `X` / `O` glyphs.
    pub fn new() -> Self {
        Self::with_formatter(Self::default_formatter())
    }

    /// Creates the rules with custom glyphs.
    pub fn with_formatter(formatter: GlyphFormatter) -> Self {
        Self { formatter }
    }

    /// `X` for player 1, `O` for player 2, blank for empty.
    pub fn default_formatter() -> GlyphFormatter {
        GlyphFormatter::new(vec!['X', 'O'], ' ')
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for TicTacToe {
    fn variant(&self) -> Variant {
        Variant::TicTacToe
    }

    fn width(&self) -> usize {
        Self::SIZE
    }

    fn height(&self) -> usize {
        Self::SIZE
    }

    fn formatter(&self) -> &GlyphFormatter {
        &self.formatter
    }

    fn parse_position(&self, text: &str) -> Option<Position> {
        Position::parse(text)
    }

    fn input_hint(&self) -> &'static str {
        "a cell as @Position(x,y) or x,y"
    }

    /// The requested cell must be on the board and empty.
    #[instrument(skip(self, board))]
    fn resolve(&self, board: &Board, requested: Position) -> Result<Position, MoveError> {
        match board.get_at(requested.x(), requested.y())? {
            Some(_) => Err(MoveError::CellTaken {
                position: requested,
            }),
            None => Ok(requested),
        }
    }

    #[instrument(skip(self, board))]
    fn is_win(&self, board: &Board, player: PlayerId) -> bool {
        LINES.iter().any(|line| {
            line.iter()
                .all(|&(x, y)| board.get_at(x, y) == Ok(Some(player)))
        })
    }

    fn describe_move(&self, landed: Position) -> String {
        landed.to_string()
    }
}
