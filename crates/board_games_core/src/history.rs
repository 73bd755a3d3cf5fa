//! Append-only log of accepted moves.

use crate::position::Position;
use crate::types::PlayerId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One accepted move: who played and where the piece landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// The player who moved.
    player: PlayerId,
    /// The cell the piece occupies.
    position: Position,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> {}", self.player, self.position)
    }
}

/// Ordered sequence of [`HistoryEntry`], one per accepted move.
///
/// There is no removal; its length is the number of moves played so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted move.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Number of accepted moves.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no move has been played yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent move.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Moves in the order they were played.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// All moves as a slice.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
