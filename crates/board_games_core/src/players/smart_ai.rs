//! One-ply heuristic AI.

use super::{Player, PlayerError, PlayerKind, TurnContext};
use crate::board::Board;
use crate::position::Position;
use crate::rules::Rules;
use crate::terminal::Terminal;
use crate::types::PlayerId;
use tracing::{debug, instrument};

/// AI that wins when it can, blocks when it must, and otherwise plays
/// closest to the centre of the board.
///
/// Only the next move is considered; there is no search.
#[derive(Debug, Clone)]
pub struct SmartAi {
    id: PlayerId,
    name: String,
}

impl SmartAi {
    /// Creates a smart AI.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: format!("Smart AI {id}"),
        }
    }

    /// First legal move that completes a winning line for `player`.
    fn winning_move(rules: &dyn Rules, board: &Board, moves: &[Position], player: PlayerId) -> Option<Position> {
        moves.iter().copied().find(|pos| {
            let mut trial = board.clone();
            trial.set_at(pos.x(), pos.y(), player).is_ok() && rules.is_win(&trial, player)
        })
    }

    /// Distance from the board centre, doubled to stay in integers.
    fn centre_distance(board: &Board, pos: Position) -> usize {
        (2 * pos.x()).abs_diff(board.width() - 1) + (2 * pos.y()).abs_diff(board.height() - 1)
    }
}

impl Player for SmartAi {
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
        let rules = ctx.rules();
        let board = ctx.board();
        let moves = rules.legal_moves(board);

        if let Some(pos) = Self::winning_move(rules, board, &moves, ctx.me()) {
            debug!(%pos, "Playing winning move");
            return Ok(Some(pos));
        }
        if let Some(pos) = Self::winning_move(rules, board, &moves, ctx.opponent()) {
            debug!(%pos, "Blocking opponent");
            return Ok(Some(pos));
        }

        let pos = moves
            .iter()
            .copied()
            .min_by_key(|&pos| (Self::centre_distance(board, pos), pos.y(), pos.x()))
            .ok_or(PlayerError::NoLegalMove)?;
        debug!(%pos, "Playing towards the centre");
        Ok(Some(pos))
    }
}
