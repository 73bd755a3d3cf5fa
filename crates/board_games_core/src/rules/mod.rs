//! Game rules.
//!
//! A rule set fixes the board size, decides where a requested move lands
//! (the placement rule) and whether a player has won (the win predicate).
//! The game state machine is shared; only the rule set differs per variant.

mod connect_four;
mod tic_tac_toe;

pub use connect_four::{ConnectFour, DropPosition};
pub use tic_tac_toe::TicTacToe;

use crate::board::{Board, BoardError, GlyphFormatter};
use crate::position::Position;
use crate::types::{PlayerId, Variant};
use derive_more::{Display, Error, From};

/// Error that can occur when validating a requested move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The coordinate is not on the board.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// The requested cell already holds a piece.
    #[display("Position {position} is already taken.")]
    CellTaken {
        /// Requested cell.
        position: Position,
    },

    /// The requested column has no empty cell left.
    #[display("Column {column} is already filled.")]
    ColumnFilled {
        /// Requested column.
        column: usize,
    },

    /// The requested column is not on the board.
    #[display("Column {column} does not exist, pick one from 0 to {}.", width - 1)]
    NoSuchColumn {
        /// Requested column.
        column: usize,
        /// Board width.
        width: usize,
    },
}

/// Variant-specific rules plugged into a [`Game`](crate::Game).
pub trait Rules: std::fmt::Debug {
    /// Which game these rules describe.
    fn variant(&self) -> Variant;

    /// Board width.
    fn width(&self) -> usize;

    /// Board height.
    fn height(&self) -> usize;

    /// Glyphs used to render this game's board.
    fn formatter(&self) -> &GlyphFormatter;

    /// Creates an empty board sized for this game.
    fn new_board(&self) -> Result<Board, BoardError> {
        Board::new(self.width(), self.height(), self.formatter().clone())
    }

    /// Parses a player's textual move.
    fn parse_position(&self, text: &str) -> Option<Position>;

    /// Short description of the accepted input syntax, shown in prompts.
    fn input_hint(&self) -> &'static str;

    /// Applies the placement rule without mutating the board.
    ///
    /// Returns the cell the piece would occupy.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the move is illegal on this board.
    fn resolve(&self, board: &Board, requested: Position) -> Result<Position, MoveError>;

    /// Win predicate: whether `player` has a winning configuration.
    fn is_win(&self, board: &Board, player: PlayerId) -> bool;

    /// Wording for a status line such as `Player 1 played column 3.`
    fn describe_move(&self, landed: Position) -> String;

    /// Every distinct legal landing cell on `board`.
    fn legal_moves(&self, board: &Board) -> Vec<Position> {
        let mut moves = Vec::new();
        for y in 0..board.height() {
            for x in 0..board.width() {
                if let Ok(landing) = self.resolve(board, Position::new(x, y))
                    && !moves.contains(&landing)
                {
                    moves.push(landing);
                }
            }
        }
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_messages() {
        assert_eq!(
            MoveError::ColumnFilled { column: 3 }.to_string(),
            "Column 3 is already filled."
        );
        assert_eq!(
            MoveError::NoSuchColumn { column: 9, width: 7 }.to_string(),
            "Column 9 does not exist, pick one from 0 to 6."
        );
        assert_eq!(
            MoveError::CellTaken { position: Position::new(1, 2) }.to_string(),
            "Position (1, 2) is already taken."
        );
    }

    #[test]
    fn test_board_error_converts() {
        let err: MoveError = BoardError::Occupied { x: 0, y: 0 }.into();
        assert_eq!(err.to_string(), "Position (0, 0) is already occupied.");
    }
}
