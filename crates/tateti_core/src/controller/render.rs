//! Display collaborator interface.
//!
//! The controller pushes a [`RenderSnapshot`] after every state-machine step
//! and announces match and game ends. Animations and pauses happen on the far
//! side of this trait; the controller is not re-entered while a call runs.

use super::phase::{MatchOutcome, MatchPhase};
use super::state::MatchScore;
use crate::color::Rgb;
use crate::settings::{Difficulty, GameMode};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Everything the display needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Board cells, row-major.
    pub board: [Cell; 9],
    /// Player one's match wins.
    pub p1_score: u8,
    /// Player two's match wins.
    pub p2_score: u8,
    /// Player to move.
    pub current_player: Player,
    /// Controller phase at the time of the snapshot.
    pub phase: MatchPhase,
}

impl RenderSnapshot {
    /// Scores as a pair.
    pub fn score(&self) -> MatchScore {
        MatchScore {
            p1: self.p1_score,
            p2: self.p2_score,
        }
    }
}

/// Output collaborator.
pub trait Renderer {
    /// Redraws board, scores and turn indicator.
    fn render(&mut self, snapshot: &RenderSnapshot);

    /// Highlights the winning line, or signals a draw.
    fn show_match_end(&mut self, outcome: MatchOutcome);

    /// Plays the final animation for the game winner.
    fn show_game_end(&mut self, winner: Player);

    /// Shows the selected mode and AI tier.
    fn show_mode(&mut self, _mode: GameMode, _difficulty: Difficulty) {}

    /// Repaints marks after a colour key. Hosts that read the selector while drawing can ignore it.
    fn show_colors(&mut self, _player1: Rgb, _player2: Rgb) {}

    /// Called before the AI computes a move. Hosts may pause here.
    fn ai_thinking(&mut self, _side: Player) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _snapshot: &RenderSnapshot) {}
    fn show_match_end(&mut self, _outcome: MatchOutcome) {}
    fn show_game_end(&mut self, _winner: Player) {}
}

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderEvent {
    /// [`Renderer::render`].
    Frame(RenderSnapshot),
    /// [`Renderer::show_match_end`].
    MatchEnd(MatchOutcome),
    /// [`Renderer::show_game_end`].
    GameEnd(Player),
    /// [`Renderer::show_mode`].
    Mode(GameMode, Difficulty),
    /// [`Renderer::show_colors`].
    Colors(Rgb, Rgb),
    /// [`Renderer::ai_thinking`].
    AiThinking(Player),
}

/// Keeps every call in order, for tests and headless runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingRenderer {
    events: Vec<RenderEvent>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Drains the recorded calls.
    pub fn take_events(&mut self) -> Vec<RenderEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshots received so far.
    pub fn frames(&self) -> impl Iterator<Item = &RenderSnapshot> {
        self.events.iter().filter_map(|event| match event {
            RenderEvent::Frame(snapshot) => Some(snapshot),
            _ => None,
        })
    }

    /// Match outcomes announced so far.
    pub fn match_outcomes(&self) -> impl Iterator<Item = MatchOutcome> + '_ {
        self.events.iter().filter_map(|event| match event {
            RenderEvent::MatchEnd(outcome) => Some(*outcome),
            _ => None,
        })
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        self.events.push(RenderEvent::Frame(*snapshot));
    }

    fn show_match_end(&mut self, outcome: MatchOutcome) {
        self.events.push(RenderEvent::MatchEnd(outcome));
    }

    fn show_game_end(&mut self, winner: Player) {
        self.events.push(RenderEvent::GameEnd(winner));
    }

    fn show_mode(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.events.push(RenderEvent::Mode(mode, difficulty));
    }

    fn show_colors(&mut self, player1: Rgb, player2: Rgb) {
        self.events.push(RenderEvent::Colors(player1, player2));
    }

    fn ai_thinking(&mut self, side: Player) {
        self.events.push(RenderEvent::AiThinking(side));
    }
}
