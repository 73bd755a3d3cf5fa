//! Interactive menus: game choice, opponent choice, and running a session.

use crate::config::Settings;
use board_games_core::{
    ChuckNorris, FinishedGame, Game, GameError, Human, Player, PlayerError, PlayerId, SmartAi,
    StupidAi, Terminal, Variant,
};
use std::io;
use strum::IntoEnumIterator;
use tracing::{debug, error, info, instrument, warn};

/// Seat of the human who always moves first.
const FIRST: PlayerId = PlayerId::new(1);
/// Seat of the chosen opponent.
const SECOND: PlayerId = PlayerId::new(2);

/// Opponent choices, in opponent-menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Opponent {
    /// Another person at the same keyboard.
    #[strum(to_string = "Human vs Human")]
    Human,
    /// Random moves.
    #[strum(to_string = "Human vs Stupid AI")]
    StupidAi,
    /// One-ply heuristic.
    #[strum(to_string = "Human vs Smart AI")]
    SmartAi,
    /// Not implemented yet.
    #[strum(to_string = "Human vs Chuck Norris")]
    ChuckNorris,
}

impl Opponent {
    /// Builds the opponent's player for seat `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::Unimplemented`] for [`Opponent::ChuckNorris`].
    #[instrument]
    pub fn build(self, id: PlayerId, seed: Option<u64>) -> Result<Box<dyn Player>, PlayerError> {
        let player: Box<dyn Player> = match self {
            Opponent::Human => Box::new(Human::new(id)),
            Opponent::StupidAi => match seed {
                Some(seed) => Box::new(StupidAi::with_seed(id, seed)),
                None => Box::new(StupidAi::new(id)),
            },
            Opponent::SmartAi => Box::new(SmartAi::new(id)),
            Opponent::ChuckNorris => Box::new(ChuckNorris::new(id)?),
        };
        Ok(player)
    }
}

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    /// Play a game.
    Play(Variant),
    /// Leave the program.
    Exit,
}

/// How a session ended, as seen by the menu.
#[derive(Debug)]
pub enum SessionEnd {
    /// The game reached a win or a draw.
    Finished(FinishedGame),
    /// The chosen opponent could not be created.
    Unavailable(PlayerError),
    /// The game failed part-way.
    Aborted,
    /// Input ran out; the program should stop.
    InputClosed,
}

/// The text menus wrapped around the games.
#[derive(Debug, Clone)]
pub struct Menu {
    settings: Settings,
}

impl Menu {
    /// Creates a menu using `settings` for glyphs and AI seeding.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Shows the main menu until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal fails.
    #[instrument(skip_all)]
    pub fn run(&self, terminal: &mut dyn Terminal) -> anyhow::Result<()> {
        info!("Starting menu loop");
        terminal.write_line("==[Board games]====")?;

        loop {
            let Some(MainChoice::Play(variant)) = self.choose_game(terminal)? else {
                break;
            };
            let Some(opponent) = self.choose_opponent(terminal)? else {
                break;
            };
            if let SessionEnd::InputClosed = self.play(variant, opponent, terminal)? {
                break;
            }
        }

        info!("Leaving menu");
        Ok(())
    }

    /// Plays a single game of `variant`, asking for the opponent if not given.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal fails.
    #[instrument(skip(self, terminal))]
    pub fn run_once(
        &self,
        variant: Variant,
        opponent: Option<Opponent>,
        terminal: &mut dyn Terminal,
    ) -> anyhow::Result<Option<SessionEnd>> {
        let opponent = match opponent {
            Some(opponent) => opponent,
            None => match self.choose_opponent(terminal)? {
                Some(opponent) => opponent,
                None => return Ok(None),
            },
        };
        Ok(Some(self.play(variant, opponent, terminal)?))
    }

    /// Main menu. `None` when input ends.
    #[instrument(skip_all)]
    pub fn choose_game(&self, terminal: &mut dyn Terminal) -> io::Result<Option<MainChoice>> {
        terminal.write_line("Choose what game you want to play, or if you want to exit the program.")?;
        let variants: Vec<Variant> = Variant::iter().collect();
        for (number, variant) in variants.iter().enumerate() {
            terminal.write_line(&format!(" {}. {variant}", number + 1))?;
        }
        terminal.write_line(&format!(" {}. Exit", variants.len() + 1))?;

        let choice = read_choice(terminal, variants.len() + 1)?.map(|number| {
            variants
                .get(number - 1)
                .map_or(MainChoice::Exit, |&variant| MainChoice::Play(variant))
        });
        debug!(?choice, "Main menu choice");
        Ok(choice)
    }

    /// Opponent menu. `None` when input ends.
    #[instrument(skip_all)]
    pub fn choose_opponent(&self, terminal: &mut dyn Terminal) -> io::Result<Option<Opponent>> {
        terminal.write_line("What kind of game would you like to play?")?;
        let opponents: Vec<Opponent> = Opponent::iter().collect();
        for (number, opponent) in opponents.iter().enumerate() {
            terminal.write_line(&format!(" {}. {opponent}", number + 1))?;
        }

        let choice = read_choice(terminal, opponents.len())?.map(|number| opponents[number - 1]);
        debug!(?choice, "Opponent choice");
        if choice.is_some() {
            terminal.write_line("")?;
        }
        Ok(choice)
    }

    /// Runs one game: a human in the first seat against `opponent`.
    ///
    /// Failures of the game itself are reported on the terminal and end
    /// only this session.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal fails.
    #[instrument(skip(self, terminal))]
    pub fn play(
        &self,
        variant: Variant,
        opponent: Opponent,
        terminal: &mut dyn Terminal,
    ) -> anyhow::Result<SessionEnd> {
        let glyphs = self.settings.glyphs().for_variant(variant).clone();
        let mut game = Game::new(variant.rules(Some(glyphs)))?;
        game.add_player(Box::new(Human::new(FIRST)))?;

        let second = match opponent.build(SECOND, *self.settings.seed()) {
            Ok(player) => player,
            Err(err) => {
                warn!(%err, "Opponent unavailable");
                terminal.error_line(&err.to_string())?;
                return Ok(SessionEnd::Unavailable(err));
            }
        };
        game.add_player(second)?;

        match game.run(terminal) {
            Ok(finished) => {
                info!(outcome = ?finished.outcome(), "Session finished");
                Ok(SessionEnd::Finished(finished))
            }
            Err(GameError::Player(PlayerError::InputClosed)) => {
                info!("Input closed during game");
                Ok(SessionEnd::InputClosed)
            }
            Err(GameError::Io(err)) => Err(err.into()),
            Err(err) => {
                error!(%err, "Game aborted");
                terminal.error_line(&format!("Game aborted: {err}"))?;
                Ok(SessionEnd::Aborted)
            }
        }
    }
}

/// Prompts until the user types a number in `1..=count`.
///
/// Anything else is silently re-prompted. `None` when input ends.
fn read_choice(terminal: &mut dyn Terminal, count: usize) -> io::Result<Option<usize>> {
    loop {
        terminal.prompt("=> ")?;
        let Some(line) = terminal.read_line()? else {
            return Ok(None);
        };
        match line.trim().parse::<usize>() {
            Ok(number) if (1..=count).contains(&number) => return Ok(Some(number)),
            _ => debug!(input = %line, "Ignoring menu input"),
        }
    }
}
