//! Placeholder for an opponent that wins in three moves.

use super::{Player, PlayerError, PlayerKind, TurnContext};
use crate::position::Position;
use crate::terminal::Terminal;
use crate::types::PlayerId;
use tracing::{instrument, warn};

/// Opponent that is not implemented yet.
///
/// Construction always fails with [`PlayerError::Unimplemented`], so a game
/// can never be started against it.
#[derive(Debug)]
pub struct ChuckNorris {
    id: PlayerId,
}

impl ChuckNorris {
    /// Display name.
    pub const NAME: &'static str = "Chuck Norris";

    /// Always fails.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Unimplemented`].
    #[instrument]
    pub fn new(id: PlayerId) -> Result<Self, PlayerError> {
        warn!(%id, "Chuck Norris requested but not implemented");
        Err(PlayerError::Unimplemented { what: Self::NAME })
    }
}

/// Never reached at run time; lets the opponent builder treat every choice as a `Player`.
impl Player for ChuckNorris {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    fn next_position(
        &mut self,
        _ctx: &TurnContext<'_>,
        _terminal: &mut dyn Terminal,
    ) -> Result<Option<Position>, PlayerError> {
        Err(PlayerError::Unimplemented { what: Self::NAME })
    }
}
