//! Fixed-size grid of optional occupants.

use crate::types::PlayerId;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Maps occupants to the characters used when rendering a board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GlyphFormatter {
    /// One glyph per player, indexed by player number minus one.
    players: Vec<char>,
    /// Glyph for an empty cell.
    empty: char,
}

impl GlyphFormatter {
    /// Creates a formatter from per-player glyphs and an empty-cell glyph.
    pub fn new(players: Vec<char>, empty: char) -> Self {
        Self { players, empty }
    }

    /// Glyph for a cell occupant; `?` for a player without an assigned glyph.
    pub fn glyph(&self, occupant: Option<PlayerId>) -> char {
        match occupant {
            None => self.empty,
            Some(player) => self.players.get(player.index()).copied().unwrap_or('?'),
        }
    }
}

/// Errors raised by board access.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Width or height was zero.
    #[display("Board dimensions must be positive, got {width}x{height}.")]
    ZeroDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Width times height does not fit in memory.
    #[display("Board dimensions {width}x{height} are too large.")]
    TooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Coordinate outside `[0, width) x [0, height)`.
    #[display("Position ({x}, {y}) is outside the {width}x{height} board.")]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },

    /// Target cell already holds a piece.
    #[display("Position ({x}, {y}) is already occupied.")]
    Occupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

/// A `width` x `height` grid whose cells are empty or hold a player's piece.
///
/// Cells are stored row-major. Once a cell is occupied it is never cleared
/// or reassigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
    formatter: GlyphFormatter,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::ZeroDimension`] if either dimension is zero and
    /// [`BoardError::TooLarge`] if the grid cannot be allocated.
    #[instrument(skip(formatter))]
    pub fn new(width: usize, height: usize, formatter: GlyphFormatter) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        let cells = width
            .checked_mul(height)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<Option<PlayerId>>())
            .ok_or(BoardError::TooLarge { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![None; cells],
            formatter,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Formatter used for rendering.
    pub fn formatter(&self) -> &GlyphFormatter {
        &self.formatter
    }

    /// Whether `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if !self.in_bounds(x, y) {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y * self.width + x)
    }

    /// Returns the occupant of `(x, y)`, `None` if empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the board.
    pub fn get_at(&self, x: usize, y: usize) -> Result<Option<PlayerId>, BoardError> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    /// Places `player` at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for coordinates off the board and
    /// [`BoardError::Occupied`] if the cell already holds a piece. The board
    /// is unchanged on error.
    #[instrument(skip(self))]
    pub fn set_at(&mut self, x: usize, y: usize, player: PlayerId) -> Result<(), BoardError> {
        let index = self.index(x, y)?;
        if self.cells[index].is_some() {
            return Err(BoardError::Occupied { x, y });
        }
        self.cells[index] = Some(player);
        trace!(x, y, %player, "Cell occupied");
        Ok(())
    }

    /// Whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl std::fmt::Display for Board {
    /// Renders rows top to bottom with column and row indices.
    ///
    /// ```text
    ///    0 1 2
    /// 0 |X| |O|
    /// 1 | |X| |
    /// 2 | | | |
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for x in 0..self.width {
            write!(f, " {x}")?;
        }
        for y in 0..self.height {
            write!(f, "\n{y} |")?;
            for x in 0..self.width {
                let occupant = self.cells[y * self.width + x];
                write!(f, "{}|", self.formatter.glyph(occupant))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn board(width: usize, height: usize) -> Board {
        Board::new(width, height, GlyphFormatter::new(vec!['X', 'O'], ' ')).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board(7, 6);
        for y in 0..6 {
            for x in 0..7 {
                assert_eq!(board.get_at(x, y), Ok(None));
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let fmt = GlyphFormatter::new(vec!['X'], '.');
        assert_eq!(
            Board::new(0, 3, fmt.clone()),
            Err(BoardError::ZeroDimension { width: 0, height: 3 })
        );
        assert!(Board::new(3, 0, fmt).is_err());
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        let fmt = GlyphFormatter::new(vec!['X', 'O'], '.');
        assert!(matches!(
            Board::new(usize::MAX / 2, 1, fmt.clone()),
            Err(BoardError::TooLarge { .. })
        ));
        assert_eq!(
            Board::new(usize::MAX, 2, fmt),
            Err(BoardError::TooLarge {
                width: usize::MAX,
                height: 2
            })
        );
    }

    #[test]
    fn test_error_wording_ends_sentences() {
        let err = BoardError::OutOfBounds { x: 3, y: 0, width: 3, height: 3 };
        assert_eq!(err.to_string(), "Position (3, 0) is outside the 3x3 board.");
    }

    #[test]
    fn test_set_then_get() {
        let mut board = board(3, 3);
        board.set_at(0, 2, P1).unwrap();
        board.set_at(2, 0, P2).unwrap();

        assert_eq!(board.get_at(0, 2), Ok(Some(P1)));
        assert_eq!(board.get_at(2, 0), Ok(Some(P2)));
        assert_eq!(board.get_at(1, 1), Ok(None));
        assert_eq!(board.occupied(), 2);
    }

    #[test]
    fn test_out_of_bounds_never_mutates() {
        let mut board = board(3, 3);
        let before = board.clone();

        assert!(matches!(board.get_at(3, 0), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(board.get_at(0, 3), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(board.set_at(3, 1, P1), Err(BoardError::OutOfBounds { .. })));
        assert!(matches!(board.set_at(1, 7, P1), Err(BoardError::OutOfBounds { .. })));

        assert_eq!(board, before);
    }

    #[test]
    fn test_occupied_cell_not_overwritten() {
        let mut board = board(3, 3);
        board.set_at(1, 1, P1).unwrap();

        assert_eq!(board.set_at(1, 1, P2), Err(BoardError::Occupied { x: 1, y: 1 }));
        assert_eq!(board.get_at(1, 1), Ok(Some(P1)));
    }

    #[test]
    fn test_is_full() {
        let mut board = board(2, 1);
        assert!(!board.is_full());
        board.set_at(0, 0, P1).unwrap();
        assert!(!board.is_full());
        board.set_at(1, 0, P2).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_render() {
        let mut board = board(3, 2);
        board.set_at(0, 0, P1).unwrap();
        board.set_at(2, 1, P2).unwrap();

        assert_eq!(board.to_string(), "   0 1 2\n0 |X| | |\n1 | | |O|");
    }

    #[test]
    fn test_unknown_player_glyph() {
        let fmt = GlyphFormatter::new(vec!['X'], '.');
        assert_eq!(fmt.glyph(Some(PlayerId::new(3))), '?');
        assert_eq!(fmt.glyph(None), '.');
    }
}
