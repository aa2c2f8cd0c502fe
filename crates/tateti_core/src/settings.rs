//! Runtime-configurable match settings.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who controls player two.
///
/// Defaults to [`GameMode::PvP`] so two people can play on the keypad.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the keypad.
    #[default]
    PvP,
    /// One human against the AI engine.
    PvAi,
}

impl GameMode {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::PvP => "Player vs Player",
            Self::PvAi => "Player vs AI",
        }
    }

    /// Toggles between `PvP` and `PvAi`.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::PvP => Self::PvAi,
            Self::PvAi => Self::PvP,
        }
    }
}

/// AI strength tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random move.
    Easy,
    /// Win, block, center, corner, first free.
    #[default]
    Medium,
    /// Exhaustive minimax.
    Hard,
}

impl Difficulty {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Who opens the next match after a match ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartRule {
    /// The player who did not open the previous match opens the next one.
    #[default]
    Alternate,
    /// Player one opens every match.
    Fixed,
}
