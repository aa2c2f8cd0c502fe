//! Keypad classification.
//!
//! The device reads a 4x4 matrix keypad. Keys are numbered row by row:
//!
//! ```text
//! [P0 ] [P1 ] [P2 ] [P3 ]      [easy  ] [medium] [hard ] [color1]
//! [P4 ] [P5 ] [P6 ] [P7 ]  ->  [0     ] [1     ] [2    ] [color2]
//! [P8 ] [P9 ] [P10] [P11]      [3     ] [4     ] [5    ] [mode  ]
//! [P12] [P13] [P14] [P15]      [6     ] [7     ] [8    ] [reset ]
//! ```
//!
//! Wire codes are 1..=16 for P0..P15; 0 means no key.

use crate::action::SemanticAction;
use crate::position::Position;
use crate::settings::Difficulty;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// A physical key on the 4x4 keypad.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Key {
    /// Row 0, column 0.
    P0 = 1,
    /// Row 0, column 1.
    P1,
    /// Row 0, column 2.
    P2,
    /// Row 0, column 3.
    P3,
    /// Row 1, column 0.
    P4,
    /// Row 1, column 1.
    P5,
    /// Row 1, column 2.
    P6,
    /// Row 1, column 3.
    P7,
    /// Row 2, column 0.
    P8,
    /// Row 2, column 1.
    P9,
    /// Row 2, column 2.
    P10,
    /// Row 2, column 3.
    P11,
    /// Row 3, column 0.
    P12,
    /// Row 3, column 1.
    P13,
    /// Row 3, column 2.
    P14,
    /// Row 3, column 3.
    P15,
}

impl Key {
    /// Wire code of this key (1..=16).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Key for a wire code; `None` for 0 and anything above 16.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::from_repr(code)
    }

    /// Key at a keypad row and column (both 0..4).
    pub fn at(row: usize, col: usize) -> Option<Self> {
        if row >= 4 || col >= 4 {
            return None;
        }
        Self::from_code((row * 4 + col + 1) as u8)
    }
}

/// Board keys in position order.
const BOARD_KEYS: [Key; 9] = [
    Key::P4,
    Key::P5,
    Key::P6,
    Key::P8,
    Key::P9,
    Key::P10,
    Key::P12,
    Key::P13,
    Key::P14,
];

/// Maps a key to its semantic action.
#[instrument(level = "trace")]
pub fn classify(key: Key) -> SemanticAction {
    let action = match key {
        Key::P0 => SemanticAction::SetDifficulty(Difficulty::Easy),
        Key::P1 => SemanticAction::SetDifficulty(Difficulty::Medium),
        Key::P2 => SemanticAction::SetDifficulty(Difficulty::Hard),
        Key::P3 => SemanticAction::ChangeColorP1,
        Key::P7 => SemanticAction::ChangeColorP2,
        Key::P11 => SemanticAction::ToggleMode,
        Key::P15 => SemanticAction::Reset,
        board => BOARD_KEYS
            .iter()
            .position(|k| *k == board)
            .and_then(Position::from_index)
            .map_or(SemanticAction::None, SemanticAction::BoardPosition),
    };
    trace!(%key, %action, "Key classified");
    action
}

/// Maps a raw wire code to its semantic action; unknown codes yield `None`.
pub fn classify_code(code: u8) -> SemanticAction {
    Key::from_code(code).map_or(SemanticAction::None, classify)
}

/// The key that plays `pos`.
pub fn key_for_position(pos: Position) -> Key {
    BOARD_KEYS[pos.to_index()]
}
