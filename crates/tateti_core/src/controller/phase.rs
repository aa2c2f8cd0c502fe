//! Controller phases and match outcomes.

use crate::rules::WinLine;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A player completed a line.
    Win {
        /// The completed line.
        line: WinLine,
        /// Who completed it.
        winner: Player,
    },
    /// Full board, no line.
    Draw,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            MatchOutcome::Win { winner, .. } => Some(*winner),
            MatchOutcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            MatchOutcome::Win { line, .. } => Some(*line),
            MatchOutcome::Draw => None,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win { line, winner } => write!(f, "{} wins on {}", winner, line),
            MatchOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// State of the match controller.
///
/// `CheckWin` and `MatchEnd` are completion states: the controller resolves
/// them before it returns from a dispatch, so callers only ever observe
/// `Idle`, `Playing` and `GameEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for a first move; mode and difficulty may change.
    #[default]
    Idle,
    /// A match is running.
    Playing,
    /// A move was accepted and the board must be judged.
    CheckWin,
    /// A match ended and must be scored.
    MatchEnd(MatchOutcome),
    /// A player reached the score threshold. Only reset leaves this state.
    GameEnd(Player),
}

impl MatchPhase {
    /// True for the completion states that never wait for input.
    pub fn is_transient(&self) -> bool {
        matches!(self, MatchPhase::CheckWin | MatchPhase::MatchEnd(_))
    }
}

impl std::fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPhase::Idle => write!(f, "Idle"),
            MatchPhase::Playing => write!(f, "Playing"),
            MatchPhase::CheckWin => write!(f, "CheckWin"),
            MatchPhase::MatchEnd(outcome) => write!(f, "MatchEnd({})", outcome),
            MatchPhase::GameEnd(winner) => write!(f, "GameEnd({})", winner),
        }
    }
}
