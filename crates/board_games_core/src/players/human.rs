//! Human player that reads moves from the terminal.

use super::{Player, PlayerError, PlayerKind, TurnContext};
use crate::position::Position;
use crate::terminal::Terminal;
use crate::types::PlayerId;
use tracing::{debug, instrument};

/// Human player using line input.
#[derive(Debug, Clone)]
pub struct Human {
    id: PlayerId,
    name: String,
}

impl Human {
    /// Creates a human player named after its number.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Player {id}"),
        }
    }

    /// Creates a human player with a custom name.
    pub fn named(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Player for Human {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    /// Reads one line. Malformed text prints a hint and yields `None` so
    /// the game asks again.
    #[instrument(skip(self, ctx, terminal), fields(player = %self.id))]
    fn next_position(
        &mut self,
        ctx: &TurnContext<'_>,
        terminal: &mut dyn Terminal,
    ) -> Result<Option<Position>, PlayerError> {
        let hint = ctx.rules().input_hint();
        terminal.prompt(&format!("{} ({hint}) => ", self.name))?;

        let Some(line) = terminal.read_line()? else {
            debug!("Input closed while waiting for a move");
            return Err(PlayerError::InputClosed);
        };

        let text = line.trim();
        match ctx.rules().parse_position(text) {
            Some(position) => {
                debug!(%position, "Parsed move");
                Ok(Some(position))
            }
            None => {
                terminal.error_line(&format!("\"{text}\" is not a move, expected {hint}."))?;
                Ok(None)
            }
        }
    }
}
