//! Match controller: the state machine driving a game.
//!
//! One external [`SemanticAction`] is handled per [`MatchController::dispatch`]
//! call. After it, completion transitions (`CheckWin`, `MatchEnd`) are run to a
//! fixpoint, then the AI plays for as long as it is its turn, each AI move going
//! through the same move path as a key press. A dispatch therefore always
//! returns with the phase at `Idle`, `Playing` or `GameEnd`.

mod phase;
mod render;
mod state;

pub use phase::{MatchOutcome, MatchPhase};
pub use render::{NullRenderer, RecordingRenderer, RenderEvent, RenderSnapshot, Renderer};
pub use state::{MatchScore, MatchState};

use crate::action::{Move, SemanticAction};
use crate::ai::AiEngine;
use crate::color::ColorSelector;
use crate::config::GameConfig;
use crate::position::Position;
use crate::settings::{Difficulty, GameMode};
use crate::types::{Board, Player};
use tracing::{debug, error, info, instrument};

/// Orchestrates turns, scoring and configuration for one device.
#[derive(Debug)]
pub struct MatchController<R, C> {
    state: MatchState,
    phase: MatchPhase,
    config: GameConfig,
    mode: GameMode,
    difficulty: Difficulty,
    engine: AiEngine,
    renderer: R,
    colors: C,
}

impl<R: Renderer, C: ColorSelector> MatchController<R, C> {
    /// Creates an idle controller with an empty board and zero score.
    #[instrument(skip(renderer, colors))]
    pub fn new(config: GameConfig, renderer: R, colors: C) -> Self {
        let engine = match config.seed() {
            Some(seed) => AiEngine::seeded(*seed),
            None => AiEngine::new(),
        };
        info!(mode = %config.mode(), difficulty = %config.difficulty(), "Creating MatchController");
        Self {
            state: MatchState::new(),
            phase: MatchPhase::Idle,
            mode: *config.mode(),
            difficulty: *config.difficulty(),
            config,
            engine,
            renderer,
            colors,
        }
    }

    /// Current phase. Never a transient phase between dispatches.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Board of the current match.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Match wins so far.
    pub fn score(&self) -> MatchScore {
        *self.state.score()
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        *self.state.current_player()
    }

    /// Full match state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Active game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Active AI tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Configuration the controller was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The display collaborator.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The display collaborator, mutably.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The colour collaborator.
    pub fn colors(&self) -> &C {
        &self.colors
    }

    /// True when the controller must pick the next move itself.
    pub fn is_ai_turn(&self) -> bool {
        self.mode == GameMode::PvAi
            && self.phase == MatchPhase::Playing
            && self.current_player() == *self.config.ai_side()
    }

    /// What the display should currently show.
    pub fn snapshot(&self) -> RenderSnapshot {
        let score = self.score();
        RenderSnapshot {
            board: self.state.board().snapshot(),
            p1_score: score.p1,
            p2_score: score.p2,
            current_player: self.current_player(),
            phase: self.phase,
        }
    }

    /// Pushes the current snapshot, mode and colours to the display without changing state.
    pub fn refresh(&mut self) {
        self.renderer.show_mode(self.mode, self.difficulty);
        self.show_colors();
        self.render();
    }

    /// Handles one external action and resolves everything it triggers.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn dispatch(&mut self, action: SemanticAction) {
        self.handle(action);
        self.render();
        self.drain();
        self.play_ai_turns();
    }

    fn handle(&mut self, action: SemanticAction) {
        match (self.phase, action) {
            (_, SemanticAction::None) => {}
            (_, SemanticAction::ChangeColorP1) => {
                self.colors.cycle_player1();
                self.show_colors();
            }
            (_, SemanticAction::ChangeColorP2) => {
                self.colors.cycle_player2();
                self.show_colors();
            }
            (_, SemanticAction::Reset) => self.reset(),
            (MatchPhase::Idle, SemanticAction::ToggleMode) => {
                self.mode = self.mode.toggle();
                info!(mode = %self.mode, "Game mode changed");
                self.renderer.show_mode(self.mode, self.difficulty);
            }
            (MatchPhase::Idle, SemanticAction::SetDifficulty(difficulty))
                if self.mode == GameMode::PvAi =>
            {
                self.difficulty = difficulty;
                info!(%difficulty, "AI difficulty changed");
                self.renderer.show_mode(self.mode, self.difficulty);
            }
            (MatchPhase::Idle, SemanticAction::BoardPosition(pos)) => {
                info!(starter = %self.current_player(), "Match started");
                self.phase = MatchPhase::Playing;
                if self.is_ai_turn() {
                    debug!(%pos, "AI opens, key position dropped");
                } else {
                    self.play(pos);
                }
            }
            (MatchPhase::Playing, SemanticAction::BoardPosition(pos)) => {
                if self.is_ai_turn() {
                    debug!(%pos, "Ignored: AI to move");
                } else {
                    self.play(pos);
                }
            }
            (phase, action) => debug!(%phase, %action, "Action not applicable"),
        }
    }

    fn show_colors(&mut self) {
        let (p1, p2) = (self.colors.player1_color(), self.colors.player2_color());
        self.renderer.show_colors(p1, p2);
    }

    /// The single move path shared by key presses and the AI.
    fn play(&mut self, pos: Position) {
        let player = self.current_player();
        if !self.state.board().is_valid_move(pos.to_index()) {
            debug!(%pos, %player, "Move rejected");
            return;
        }
        if self.state.apply_move(Move::new(player, pos)) {
            debug!(%pos, %player, "Move accepted");
            self.phase = MatchPhase::CheckWin;
        }
    }

    /// Runs completion transitions until the phase is stable.
    fn drain(&mut self) {
        while self.step() {
            self.render();
        }
    }

    /// One completion transition. Returns false if the phase waits for input.
    fn step(&mut self) -> bool {
        match self.phase {
            MatchPhase::CheckWin => {
                let board = self.state.board();
                self.phase = match board.winner() {
                    Some((line, winner)) => {
                        MatchPhase::MatchEnd(MatchOutcome::Win { line, winner })
                    }
                    None if board.check_draw() => MatchPhase::MatchEnd(MatchOutcome::Draw),
                    None => MatchPhase::Playing,
                };
                true
            }
            MatchPhase::MatchEnd(outcome) => {
                self.finish_match(outcome);
                true
            }
            MatchPhase::Idle | MatchPhase::Playing | MatchPhase::GameEnd(_) => false,
        }
    }

    fn finish_match(&mut self, outcome: MatchOutcome) {
        if let Some(winner) = outcome.winner() {
            self.state.record_win(winner);
        }
        let score = self.score();
        info!(%outcome, p1 = score.p1, p2 = score.p2, "Match ended");
        self.renderer.show_match_end(outcome);

        self.state.next_match(*self.config.start_rule());
        match score.reached(*self.config.score_threshold()) {
            Some(champion) => {
                info!(%champion, "Game ended");
                self.phase = MatchPhase::GameEnd(champion);
                self.renderer.show_game_end(champion);
            }
            None => self.phase = MatchPhase::Playing,
        }
    }

    fn play_ai_turns(&mut self) {
        while self.is_ai_turn() {
            let side = self.current_player();
            self.renderer.ai_thinking(side);
            let board = *self.state.board();
            let Some(pos) = self.engine.calculate_move(&board, self.difficulty, side) else {
                error!("AI asked to move on a full board");
                if cfg!(debug_assertions) {
                    panic!("AI asked to move on a full board");
                }
                return;
            };
            if !board.is_valid_move(pos.to_index()) {
                error!(%pos, "AI returned an occupied cell");
                if cfg!(debug_assertions) {
                    panic!("AI returned occupied cell {pos}");
                }
                return;
            }
            self.play(pos);
            self.render();
            self.drain();
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        info!("Game reset");
        self.state.reset();
        self.phase = MatchPhase::Idle;
    }

    fn render(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot);
    }
}
