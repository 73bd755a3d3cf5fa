//! Turn-based game engine shared by every variant.
//!
//! A [`Game`] owns the board, the rule set, two players and the history.
//! [`Game::submit`] is one step of the state machine; [`Game::run`] drives
//! it to completion by asking players for moves.

use crate::board::{Board, BoardError};
use crate::history::{History, HistoryEntry};
use crate::players::{Player, PlayerError, PlayerKind, TurnContext};
use crate::position::Position;
use crate::rules::{MoveError, Rules};
use crate::terminal::Terminal;
use crate::types::{PlayerId, Variant};
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, trace, warn};

/// Number of players in every game.
const PLAYERS: usize = 2;

/// Where the game stands between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the player at `active` to move.
    AwaitingMove {
        /// Index of the active player (0 or 1).
        active: usize,
    },
    /// The player completed a winning configuration.
    Won(PlayerId),
    /// The board filled up with no winner.
    Drawn,
}

impl Phase {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::AwaitingMove { .. })
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player won.
    Won(PlayerId),
    /// Nobody won.
    Drawn,
}

/// Events reported to the terminal while a game runs.
///
/// The `Display` form is the console wording.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameEvent {
    /// The board as it now stands, already rendered.
    #[display("{_0}")]
    Board(String),

    /// A player is about to move.
    #[display("Current player: {name} ({glyph})")]
    TurnStarted {
        /// Player id.
        player: PlayerId,
        /// Player display name.
        name: String,
        /// Glyph of the player's pieces.
        glyph: char,
    },

    /// A move was accepted.
    #[display("{name} played {description}.")]
    MoveAccepted {
        /// Player id.
        player: PlayerId,
        /// Player display name.
        name: String,
        /// Where the piece landed.
        position: Position,
        /// Variant-specific wording, e.g. `column 3`.
        description: String,
    },

    /// The game ended in a win.
    #[display("{name} has won.")]
    Won {
        /// Winner id.
        player: PlayerId,
        /// Winner display name.
        name: String,
    },

    /// The game ended in a draw.
    #[display("Nobody won.")]
    Drawn,
}

/// Errors that end or prevent a game session.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// The board could not be created.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// A submitted move was illegal. Recoverable: ask again.
    #[display("{_0}")]
    #[from]
    Move(MoveError),

    /// A player could not produce a move.
    #[display("{_0}")]
    #[from]
    Player(PlayerError),

    /// The game needs exactly two players.
    #[display("A game needs exactly two players, got {count}")]
    PlayerCount {
        /// Players registered.
        count: usize,
    },

    /// Two players share an id.
    #[display("Player {id} is already taking part")]
    DuplicatePlayer {
        /// The repeated id.
        id: PlayerId,
    },

    /// A move was submitted after the game ended.
    #[display("The game is already over")]
    GameOver,

    /// Writing to the terminal failed.
    #[display("Terminal I/O failed: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl GameError {
    /// Whether the error is an illegal move that the player may retry.
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, GameError::Move(_))
    }
}

/// A game that has reached a terminal phase.
#[derive(Debug, Clone, Getters)]
pub struct FinishedGame {
    /// Who won, if anyone.
    outcome: Outcome,
    /// Final board.
    board: Board,
    /// Every accepted move.
    history: History,
}

impl FinishedGame {
    /// The winner, `None` on a draw.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            Outcome::Won(player) => Some(player),
            Outcome::Drawn => None,
        }
    }
}

/// A two-player grid game.
///
/// Constructed with an empty board sized by its rules, players are added
/// before [`Game::run`], which consumes the game.
#[derive(Debug)]
pub struct Game {
    rules: Box<dyn Rules>,
    board: Board,
    players: Vec<Box<dyn Player>>,
    history: History,
    phase: Phase,
}

impl Game {
    /// Creates a game with an empty board for `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if the rules describe an empty board.
    #[instrument(skip(rules), fields(variant = %rules.variant()))]
    pub fn new(rules: Box<dyn Rules>) -> Result<Self, GameError> {
        let board = rules.new_board()?;
        info!(width = board.width(), height = board.height(), "Creating game");
        Ok(Self {
            rules,
            board,
            players: Vec::with_capacity(PLAYERS),
            history: History::new(),
            phase: Phase::AwaitingMove { active: 0 },
        })
    }

    /// Creates a game of `variant` with default glyphs.
    pub fn for_variant(variant: Variant) -> Result<Self, GameError> {
        Self::new(variant.rules(None))
    }

    /// Registers the next player. The first player added moves first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] when two players are already
    /// registered and [`GameError::DuplicatePlayer`] on a repeated id.
    #[instrument(skip(self, player), fields(player = %player.id(), name = player.name()))]
    pub fn add_player(&mut self, player: Box<dyn Player>) -> Result<(), GameError> {
        if self.players.len() >= PLAYERS {
            warn!("Game already has two players");
            return Err(GameError::PlayerCount {
                count: self.players.len() + 1,
            });
        }
        if self.players.iter().any(|p| p.id() == player.id()) {
            return Err(GameError::DuplicatePlayer { id: player.id() });
        }
        info!(index = self.players.len(), "Registering player");
        self.players.push(player);
        Ok(())
    }

    /// Rule set in use.
    pub fn rules(&self) -> &dyn Rules {
        self.rules.as_ref()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves so far.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Registered players in turn order.
    pub fn players(&self) -> &[Box<dyn Player>] {
        &self.players
    }

    fn ensure_ready(&self) -> Result<(), GameError> {
        if self.players.len() != PLAYERS {
            return Err(GameError::PlayerCount {
                count: self.players.len(),
            });
        }
        Ok(())
    }

    /// Plays `requested` for the active player.
    ///
    /// The move is validated by the placement rule, applied, logged, and then
    /// the win predicate and the draw predicate are evaluated in that order.
    /// The active player only changes if the game continues.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Move`] for an illegal move, in which case board,
    /// history and active player are unchanged.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn submit(&mut self, requested: Position) -> Result<Phase, GameError> {
        self.ensure_ready()?;
        let Phase::AwaitingMove { active } = self.phase else {
            return Err(GameError::GameOver);
        };
        let player = self.players[active].id();

        let landing = self.rules.resolve(&self.board, requested)?;
        self.board
            .set_at(landing.x(), landing.y(), player)
            .map_err(MoveError::from)?;
        self.history.push(HistoryEntry::new(player, landing));
        debug!(%player, %landing, moves = self.history.len(), "Move accepted");

        self.phase = if self.rules.is_win(&self.board, player) {
            info!(%player, "Player won");
            Phase::Won(player)
        } else if self.history.len() == self.board.width() * self.board.height() {
            info!("Board full, draw");
            Phase::Drawn
        } else {
            Phase::AwaitingMove {
                active: (active + 1) % PLAYERS,
            }
        };
        Ok(self.phase)
    }

    /// Asks the active player until it produces a legal move, then applies it.
    ///
    /// Illegal moves are shown to humans and silently retried for computers.
    #[instrument(skip(self, terminal))]
    fn take_turn(&mut self, active: usize, terminal: &mut dyn Terminal) -> Result<Position, GameError> {
        let opponent = self.players[(active + 1) % PLAYERS].id();
        loop {
            let player = &mut self.players[active];
            let kind = player.kind();
            let ctx = TurnContext::new(
                &self.board,
                &self.history,
                self.rules.as_ref(),
                player.id(),
                opponent,
            );

            let Some(requested) = player.next_position(&ctx, terminal)? else {
                trace!("No move yet, asking again");
                continue;
            };

            match self.submit(requested) {
                Ok(_) => {
                    let landed = self
                        .history
                        .last()
                        .map(|entry| *entry.position())
                        .unwrap_or(requested);
                    return Ok(landed);
                }
                Err(GameError::Move(err)) if kind == PlayerKind::Human => {
                    debug!(%err, "Illegal move from human");
                    terminal.error_line(&err.to_string())?;
                }
                Err(GameError::Move(err)) => {
                    trace!(%err, "Illegal move from computer, retrying");
                }
                Err(other) => return Err(other),
            }
        }
    }

    /// Runs the turn loop until a win or draw.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerCount`] without two players, and any
    /// player or terminal failure, which aborts this game only.
    #[instrument(skip(self, terminal), fields(variant = %self.rules.variant()))]
    pub fn run(mut self, terminal: &mut dyn Terminal) -> Result<FinishedGame, GameError> {
        self.ensure_ready()?;
        info!("Starting game");

        while let Phase::AwaitingMove { active } = self.phase {
            terminal.show(&GameEvent::Board(self.board.to_string()))?;

            let player = &self.players[active];
            let (id, name) = (player.id(), player.name().to_string());
            terminal.show(&GameEvent::TurnStarted {
                player: id,
                glyph: self.board.formatter().glyph(Some(id)),
                name: name.clone(),
            })?;

            let landed = self.take_turn(active, terminal)?;
            terminal.show(&GameEvent::MoveAccepted {
                player: id,
                name,
                position: landed,
                description: self.rules.describe_move(landed),
            })?;
        }

        terminal.show(&GameEvent::Board(self.board.to_string()))?;
        let outcome = match self.phase {
            Phase::Won(player) => {
                let name = self
                    .players
                    .iter()
                    .find(|p| p.id() == player)
                    .map(|p| p.name().to_string())
                    .unwrap_or_else(|| format!("Player {player}"));
                terminal.show(&GameEvent::Won { player, name })?;
                Outcome::Won(player)
            }
            _ => {
                terminal.show(&GameEvent::Drawn)?;
                Outcome::Drawn
            }
        };

        info!(?outcome, moves = self.history.len(), "Game finished");
        Ok(FinishedGame {
            outcome,
            board: self.board,
            history: self.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{ChuckNorris, Human, SmartAi, StupidAi};
    use crate::rules::TicTacToe;
    use crate::terminal::ScriptedTerminal;

    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    fn two_humans(variant: Variant) -> Game {
        let mut game = Game::for_variant(variant).unwrap();
        game.add_player(Box::new(Human::new(P1))).unwrap();
        game.add_player(Box::new(Human::new(P2))).unwrap();
        game
    }

    #[test]
    fn test_new_game_sizes() {
        let game = Game::for_variant(Variant::ConnectFour).unwrap();
        assert_eq!((game.board().width(), game.board().height()), (7, 6));
        let game = Game::for_variant(Variant::TicTacToe).unwrap();
        assert_eq!((game.board().width(), game.board().height()), (3, 3));
        assert_eq!(game.phase(), Phase::AwaitingMove { active: 0 });
    }

    #[test]
    fn test_third_player_rejected() {
        let mut game = two_humans(Variant::TicTacToe);
        let err = game.add_player(Box::new(SmartAi::new(PlayerId::new(3))));
        assert!(matches!(err, Err(GameError::PlayerCount { count: 3 })));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut game = Game::new(Box::new(TicTacToe::new())).unwrap();
        game.add_player(Box::new(Human::new(P1))).unwrap();
        let err = game.add_player(Box::new(StupidAi::with_seed(P1, 1)));
        assert!(matches!(err, Err(GameError::DuplicatePlayer { id }) if id == P1));
    }

    #[test]
    fn test_submit_requires_two_players() {
        let mut game = Game::for_variant(Variant::TicTacToe).unwrap();
        game.add_player(Box::new(Human::new(P1))).unwrap();
        assert!(matches!(
            game.submit(Position::new(0, 0)),
            Err(GameError::PlayerCount { count: 1 })
        ));
    }

    #[test]
    fn test_alternation_only_on_accepted_moves() {
        let mut game = two_humans(Variant::TicTacToe);

        assert_eq!(game.submit(Position::new(0, 0)).unwrap(), Phase::AwaitingMove { active: 1 });

        // Occupied and off-board attempts do not consume the turn.
        assert!(game.submit(Position::new(0, 0)).unwrap_err().is_illegal_move());
        assert!(game.submit(Position::new(5, 5)).unwrap_err().is_illegal_move());
        assert_eq!(game.phase(), Phase::AwaitingMove { active: 1 });
        assert_eq!(game.history().len(), 1);

        assert_eq!(game.submit(Position::new(1, 1)).unwrap(), Phase::AwaitingMove { active: 0 });
        assert_eq!(game.submit(Position::new(2, 2)).unwrap(), Phase::AwaitingMove { active: 1 });

        let movers: Vec<u8> = game.history().iter().map(|e| e.player().number()).collect();
        assert_eq!(movers, [1, 2, 1]);
    }

    #[test]
    fn test_win_stops_the_game() {
        let mut game = two_humans(Variant::TicTacToe);
        for pos in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            game.submit(Position::new(pos.0, pos.1)).unwrap();
        }
        assert_eq!(game.submit(Position::new(0, 2)).unwrap(), Phase::Won(P1));
        assert!(matches!(game.submit(Position::new(2, 2)), Err(GameError::GameOver)));
    }

    #[test]
    fn test_draw_when_board_fills() {
        let mut game = two_humans(Variant::TicTacToe);
        // X O X / X O O / O X X
        let moves = [(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)];
        let mut phase = game.phase();
        for (x, y) in moves {
            phase = game.submit(Position::new(x, y)).unwrap();
        }
        assert_eq!(phase, Phase::Drawn);
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        let mut game = two_humans(Variant::TicTacToe);
        // X O X / O X O / O X X: the ninth move completes the diagonal.
        let moves = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1), (1, 2), (0, 2), (2, 2)];
        let mut phase = game.phase();
        for (x, y) in moves {
            phase = game.submit(Position::new(x, y)).unwrap();
        }
        assert_eq!(phase, Phase::Won(P1));
    }

    #[test]
    fn test_connect_four_history_records_landing_row() {
        let mut game = two_humans(Variant::ConnectFour);
        game.submit(Position::new(3, 0)).unwrap();
        game.submit(Position::new(3, 0)).unwrap();

        let landed: Vec<Position> = game.history().iter().map(|e| *e.position()).collect();
        assert_eq!(landed, [Position::new(3, 5), Position::new(3, 4)]);
    }

    #[test]
    fn test_full_column_leaves_game_unchanged() {
        let mut game = two_humans(Variant::ConnectFour);
        for _ in 0..6 {
            game.submit(Position::new(0, 0)).unwrap();
        }
        let board = game.board().clone();
        let err = game.submit(Position::new(0, 0)).unwrap_err();

        assert!(matches!(err, GameError::Move(MoveError::ColumnFilled { column: 0 })));
        assert_eq!(game.board(), &board);
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.phase(), Phase::AwaitingMove { active: 0 });
    }

    #[test]
    fn test_run_requires_two_players() {
        let game = Game::for_variant(Variant::TicTacToe).unwrap();
        let mut term = ScriptedTerminal::default();
        assert!(matches!(game.run(&mut term), Err(GameError::PlayerCount { count: 0 })));
    }

    #[test]
    fn test_run_reports_human_mistakes() {
        let game = two_humans(Variant::TicTacToe);
        let mut term = ScriptedTerminal::new([
            "0,0", "nonsense", "0,0", "1,0", "0,1", "1,1", "9,9", "0,2",
        ]);
        let finished = game.run(&mut term).unwrap();

        assert_eq!(finished.winner(), Some(P1));
        // One parse hint, one occupied cell, one off-board cell.
        assert_eq!(term.errors().len(), 3);
        assert_eq!(term.output().last().map(String::as_str), Some("Player 1 has won."));
    }

    #[test]
    fn test_run_aborts_when_input_closes() {
        let game = two_humans(Variant::ConnectFour);
        let mut term = ScriptedTerminal::new(["3"]);
        let err = game.run(&mut term).unwrap_err();
        assert!(matches!(err, GameError::Player(PlayerError::InputClosed)));
    }

    #[test]
    fn test_computers_finish_a_game_silently() {
        let mut game = Game::for_variant(Variant::ConnectFour).unwrap();
        game.add_player(Box::new(StupidAi::with_seed(P1, 3))).unwrap();
        game.add_player(Box::new(SmartAi::new(P2))).unwrap();
        let mut term = ScriptedTerminal::default();

        let finished = game.run(&mut term).unwrap();
        assert!(term.errors().is_empty());
        assert_eq!(finished.board().occupied(), finished.history().len());
    }

    #[test]
    fn test_chuck_norris_never_joins() {
        assert!(ChuckNorris::new(P2).is_err());
    }
}
