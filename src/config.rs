//! Settings loaded from a TOML file.

use board_games_core::{ConnectFour, GlyphFormatter, TicTacToe, Variant};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Glyph tables per game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSettings {
    /// Tic-tac-toe glyphs.
    tic_tac_toe: GlyphFormatter,
    /// Connect four glyphs.
    connect_four: GlyphFormatter,
}

impl Default for GlyphSettings {
    fn default() -> Self {
        Self {
            tic_tac_toe: TicTacToe::default_formatter(),
            connect_four: ConnectFour::default_formatter(),
        }
    }
}

impl GlyphSettings {
    /// Glyphs for `variant`.
    pub fn for_variant(&self, variant: Variant) -> &GlyphFormatter {
        match variant {
            Variant::TicTacToe => &self.tic_tac_toe,
            Variant::ConnectFour => &self.connect_four,
        }
    }
}

/// User settings.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for the stupid AI; random if unset.
    seed: Option<u64>,

    /// `tracing` filter used when `RUST_LOG` is not set.
    log_filter: String,

    /// Board glyphs.
    glyphs: GlyphSettings,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: default_log_filter(),
            glyphs: GlyphSettings::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed, or if
    /// a glyph table has fewer than two player glyphs.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;
        settings.validate()?;

        info!(seed = ?settings.seed, "Settings loaded");
        Ok(settings)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::from_file`] when the file exists.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the AI seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (game, glyphs) in [
            ("tic_tac_toe", &self.glyphs.tic_tac_toe),
            ("connect_four", &self.glyphs.connect_four),
        ] {
            if glyphs.players().len() < 2 {
                return Err(ConfigError::new(format!(
                    "glyphs.{game} needs at least two player glyphs"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
