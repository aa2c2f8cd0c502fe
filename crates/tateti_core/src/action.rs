//! Semantic actions and moves.
//!
//! Raw key codes are classified into [`SemanticAction`]s before they reach the
//! match controller, so the controller never sees hardware identifiers.

use crate::position::Position;
use crate::settings::Difficulty;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Hardware-independent meaning of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SemanticAction {
    /// Unmapped key.
    #[default]
    None,
    /// Mark a board position for the player to move.
    BoardPosition(Position),
    /// Cycle player one's colour.
    ChangeColorP1,
    /// Cycle player two's colour.
    ChangeColorP2,
    /// Abandon the game and return to idle.
    Reset,
    /// Switch between PvP and PvAI.
    ToggleMode,
    /// Select the AI tier.
    SetDifficulty(Difficulty),
}

impl std::fmt::Display for SemanticAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemanticAction::None => write!(f, "none"),
            SemanticAction::BoardPosition(pos) => write!(f, "board {}", pos.to_index()),
            SemanticAction::ChangeColorP1 => write!(f, "color p1"),
            SemanticAction::ChangeColorP2 => write!(f, "color p2"),
            SemanticAction::Reset => write!(f, "reset"),
            SemanticAction::ToggleMode => write!(f, "toggle mode"),
            SemanticAction::SetDifficulty(d) => write!(f, "difficulty {}", d),
        }
    }
}

/// A mark placed during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
