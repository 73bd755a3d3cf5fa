//! Grid coordinates and their textual form.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board: `x` is the column, `y` the row (row 0 is the top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    x: usize,
    y: usize,
}

impl Position {
    /// Creates a position from a column and a row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Column.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Parses `@Position(<x>,<y>)` or the shorthand `<x>,<y>` / `<x> <y>`.
    ///
    /// Returns `None` for anything else; malformed input never panics.
    #[instrument]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let inner = text
            .strip_prefix("@Position(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(text);

        let (x, y) = inner
            .split_once(',')
            .or_else(|| inner.split_once(char::is_whitespace))?;

        Some(Self::new(parse_index(x.trim())?, parse_index(y.trim())?))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses a run of ASCII digits, rejecting signs and blanks.
pub(crate) fn parse_index(digits: &str) -> Option<usize> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
