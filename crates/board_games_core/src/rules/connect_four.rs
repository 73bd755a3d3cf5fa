//! Connect four: pieces drop to the lowest free row, four in a line wins.

use super::{MoveError, Rules};
use crate::board::{Board, GlyphFormatter};
use crate::position::{Position, parse_index};
use crate::types::{PlayerId, Variant};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Axes checked for a winning run: horizontal, vertical and both diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A connect four move. Only the column matters.
///
/// The row is carried for symmetry with [`Position`] but ignored by
/// equality and hashing, since gravity decides where the piece lands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DropPosition(Position);

impl DropPosition {
    /// Creates a drop position; `row` is ignored by comparisons.
    pub const fn new(column: usize, row: usize) -> Self {
        Self(Position::new(column, row))
    }

    /// The chosen column.
    pub fn column(&self) -> usize {
        self.0.x()
    }

    /// Parses `@Column(<n>)`, or a bare column number.
    #[instrument]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let digits = text
            .strip_prefix("@Column(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(text);
        parse_index(digits).map(|column| Self::new(column, 0))
    }
}

impl PartialEq for DropPosition {
    fn eq(&self, other: &Self) -> bool {
        self.column() == other.column()
    }
}

impl Eq for DropPosition {}

impl std::hash::Hash for DropPosition {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.column().hash(state);
    }
}

impl From<DropPosition> for Position {
    fn from(drop: DropPosition) -> Self {
        drop.0
    }
}

impl From<Position> for DropPosition {
    fn from(position: Position) -> Self {
        Self(position)
    }
}

/// Connect four rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectFour {
    formatter: GlyphFormatter,
}

impl ConnectFour {
    /// Number of columns.
    pub const WIDTH: usize = 7;
    /// Number of rows.
    pub const HEIGHT: usize = 6;
    /// Length of a winning run.
    pub const RUN: usize = 4;

    /// Creates the rules with the default `R` / `Y` glyphs.
    pub fn new() -> Self {
        Self::with_formatter(Self::default_formatter())
    }

    /// Creates the rules with custom glyphs.
    pub fn with_formatter(formatter: GlyphFormatter) -> Self {
        Self { formatter }
    }

    /// `R` for player 1, `Y` for player 2, `.` for empty.
    pub fn default_formatter() -> GlyphFormatter {
        GlyphFormatter::new(vec!['R', 'Y'], '.')
    }

    /// Lowest empty row in `column`, `None` if the column is full.
    fn landing_row(board: &Board, column: usize) -> Option<usize> {
        (0..board.height())
            .rev()
            .find(|&y| matches!(board.get_at(column, y), Ok(None)))
    }

    /// Whether `RUN` cells starting at `(x, y)` along `(dx, dy)` all belong
    /// to `player`. Runs that leave the board do not count.
    fn run_from(board: &Board, player: PlayerId, x: usize, y: usize, (dx, dy): (isize, isize)) -> bool {
        (0..Self::RUN as isize).all(|step| {
            let cell = x
                .checked_add_signed(dx * step)
                .zip(y.checked_add_signed(dy * step));
            match cell {
                Some((cx, cy)) => board.get_at(cx, cy) == Ok(Some(player)),
                None => false,
            }
        })
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for ConnectFour {
    fn variant(&self) -> Variant {
        Variant::ConnectFour
    }

    fn width(&self) -> usize {
        Self::WIDTH
    }

    fn height(&self) -> usize {
        Self::HEIGHT
    }

    fn formatter(&self) -> &GlyphFormatter {
        &self.formatter
    }

    fn parse_position(&self, text: &str) -> Option<Position> {
        DropPosition::parse(text).map(Position::from)
    }

    fn input_hint(&self) -> &'static str {
        "a column as @Column(n) or n"
    }

    /// Gravity: the piece lands in the lowest empty row of the requested
    /// column. The requested row is ignored.
    #[instrument(skip(self, board))]
    fn resolve(&self, board: &Board, requested: Position) -> Result<Position, MoveError> {
        let column = requested.x();
        if column >= board.width() {
            return Err(MoveError::NoSuchColumn {
                column,
                width: board.width(),
            });
        }

        let row = Self::landing_row(board, column).ok_or(MoveError::ColumnFilled { column })?;
        trace!(column, row, "Piece lands");
        Ok(Position::new(column, row))
    }

    #[instrument(skip(self, board))]
    fn is_win(&self, board: &Board, player: PlayerId) -> bool {
        for y in 0..board.height() {
            for x in 0..board.width() {
                if board.get_at(x, y) != Ok(Some(player)) {
                    continue;
                }
                if DIRECTIONS
                    .iter()
                    .any(|&dir| Self::run_from(board, player, x, y, dir))
                {
                    return true;
                }
            }
        }
        false
    }

    fn describe_move(&self, landed: Position) -> String {
        format!("column {}", landed.x())
    }

    fn legal_moves(&self, board: &Board) -> Vec<Position> {
        (0..board.width())
            .filter_map(|column| Self::landing_row(board, column).map(|row| Position::new(column, row)))
            .collect()
    }
}
