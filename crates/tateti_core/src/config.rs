//! Game configuration.

use crate::error::ConfigError;
use crate::settings::{Difficulty, GameMode, StartRule};
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default number of match wins that ends a game.
pub const DEFAULT_SCORE_THRESHOLD: NonZeroU8 = NonZeroU8::MIN.saturating_add(2);

/// Settings the match controller starts with.
///
/// Mode and difficulty here are initial values; at runtime they change only
/// while the controller is idle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Match wins needed to end the game. Zero is rejected on load.
    score_threshold: NonZeroU8,

    /// Initial game mode.
    mode: GameMode,

    /// Initial AI tier.
    difficulty: Difficulty,

    /// Side played by the AI in PvAI mode.
    ai_side: Player,

    /// Who opens each match after the first.
    start_rule: StartRule,

    /// Seed for the easy tier; entropy from the OS when absent.
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_threshold: DEFAULT_SCORE_THRESHOLD,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            ai_side: Player::P2,
            start_rule: StartRule::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        info!(threshold = config.score_threshold.get(), mode = %config.mode, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Sets the score threshold.
    pub fn with_score_threshold(mut self, threshold: NonZeroU8) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Sets the initial mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the initial AI tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the AI side.
    pub fn with_ai_side(mut self, side: Player) -> Self {
        self.ai_side = side;
        self
    }

    /// Sets the rule for who opens each match.
    pub fn with_start_rule(mut self, rule: StartRule) -> Self {
        self.start_rule = rule;
        self
    }

    /// Sets the easy-tier seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
