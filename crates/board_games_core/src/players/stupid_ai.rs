//! Naive AI that plays anywhere.

use super::{Player, PlayerError, PlayerKind, TurnContext};
use crate::position::Position;
use crate::terminal::Terminal;
use crate::types::PlayerId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{instrument, trace};

/// AI that picks a uniformly random cell of the board.
///
/// It does not look at the board at all; illegal picks are rejected by the
/// game and the AI is simply asked again.
#[derive(Debug)]
pub struct StupidAi {
    id: PlayerId,
    name: String,
    rng: StdRng,
}

impl StupidAi {
    /// Creates an AI seeded from the operating system.
    pub fn new(id: PlayerId) -> Self {
        Self::with_rng(id, StdRng::from_os_rng())
    }

    /// Creates an AI with a fixed seed, for reproducible games.
    pub fn with_seed(id: PlayerId, seed: u64) -> Self {
        Self::with_rng(id, StdRng::seed_from_u64(seed))
    }

    fn with_rng(id: PlayerId, rng: StdRng) -> Self {
        Self {
            id,
            name: format!("Stupid AI {id}"),
            rng,
        }
    }
}

impl Player for StupidAi {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    #[instrument(skip(self, ctx, _terminal), fields(player = %self.id))]
    fn next_position(
        &mut self,
        ctx: &TurnContext<'_>,
        _terminal: &mut dyn Terminal,
    ) -> Result<Option<Position>, PlayerError> {
        let board = ctx.board();
        let position = Position::new(
            self.rng.random_range(0..board.width()),
            self.rng.random_range(0..board.height()),
        );
        trace!(%position, "Random pick");
        Ok(Some(position))
    }
}
