//! Board Games - console entry point
//!
//! Shows the main menu, or plays a single game when `--game` is given.

#![warn(missing_docs)]

use anyhow::Result;
use board_games::{Cli, ConsoleTerminal, Menu, Opponent, Settings};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load_or_default(&cli.config)?.with_seed(cli.seed);

    initialize_tracing(settings.log_filter());
    info!(config = %cli.config.display(), "Settings ready");

    let menu = Menu::new(settings);
    let mut terminal = ConsoleTerminal::stdio();

    match cli.game {
        Some(game) => {
            menu.run_once(game.into(), cli.opponent.map(Opponent::from), &mut terminal)?;
        }
        None => menu.run(&mut terminal)?,
    }

    info!("Goodbye");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
