//! Tateti core - match orchestration for a keypad tic-tac-toe device.
//!
//! The crate covers the parts of the device with real logic: the board and
//! its win rules, key classification, the three AI tiers and the match state
//! machine. Keypad scanning, LED output and animation timing live behind the
//! [`Renderer`] and [`ColorSelector`] traits.
//!
//! # Example
//!
//! ```
//! use tateti_core::{
//!     GameConfig, Key, MatchController, MatchPhase, NullRenderer, Palette, classify,
//! };
//!
//! let mut controller = MatchController::new(GameConfig::default(), NullRenderer, Palette::new());
//! for key in [Key::P4, Key::P9, Key::P5, Key::P10, Key::P6] {
//!     controller.dispatch(classify(key));
//! }
//! assert_eq!(controller.score().p1, 1);
//! assert_eq!(controller.phase(), MatchPhase::Playing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod ai;
mod color;
mod config;
mod controller;
mod error;
mod input;
mod position;
mod rules;
mod settings;
mod types;

pub use action::{Move, SemanticAction};
pub use ai::{AiEngine, easy_move, hard_move, medium_move, minimax, winning_move};
pub use color::{ColorSelector, PALETTE, Palette, Rgb};
pub use config::{DEFAULT_SCORE_THRESHOLD, GameConfig};
pub use controller::{
    MatchController, MatchOutcome, MatchPhase, MatchScore, MatchState, NullRenderer,
    RecordingRenderer, RenderEvent, RenderSnapshot, Renderer,
};
pub use error::ConfigError;
pub use input::{Key, classify, classify_code, key_for_position};
pub use position::Position;
pub use rules::{WinLine, check_win, is_draw, is_full, winning_line};
pub use settings::{Difficulty, GameMode, StartRule};
pub use types::{Board, Cell, Player};
