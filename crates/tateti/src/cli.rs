//! Command-line interface for tateti.

use clap::{Args, Parser, Subcommand};
use std::num::NonZeroU8;
use std::path::PathBuf;
use tateti_core::{ConfigError, Difficulty, GameConfig, GameMode};
use tracing::{debug, instrument};

/// Tateti - keypad tic-tac-toe played as a best-of-N game
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Keypad tic-tac-toe, best of N, with three AI tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Settings shared by every subcommand
    #[command(flatten)]
    pub game: GameArgs,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play on the terminal keypad
    Play,

    /// Run headless PvAI games with another AI standing in for the human
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Tier driving the human side
        #[arg(long, default_value = "medium")]
        opponent: Difficulty,
    },
}

/// Game settings that override the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct GameArgs {
    /// TOML file with game settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Match wins needed to end a game (at least 1)
    #[arg(long, global = true)]
    pub threshold: Option<NonZeroU8>,

    /// Initial AI tier (easy, medium, hard)
    #[arg(long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Initial mode (pvp, pvai)
    #[arg(long, global = true)]
    pub mode: Option<GameMode>,

    /// Seed for the random AI tier
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl GameArgs {
    /// Loads the config file if given, then applies command-line overrides.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(threshold) = self.threshold {
            config = config.with_score_threshold(threshold);
        }
        if let Some(difficulty) = self.difficulty {
            config = config.with_difficulty(difficulty);
        }
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        debug!(?config, "Resolved game configuration");
        Ok(config)
    }
}
