//! Display collaborator state for the terminal.

use tateti_core::{
    Cell, Difficulty, GameMode, MatchOutcome, MatchPhase, Player, RenderSnapshot, Renderer,
};
use tracing::debug;

/// Keeps whatever the controller last pushed so the UI can redraw from it.
#[derive(Debug, Clone)]
pub struct TerminalView {
    snapshot: RenderSnapshot,
    last_match: Option<([Cell; 9], MatchOutcome)>,
    banner: Option<String>,
    mode: GameMode,
    difficulty: Difficulty,
    thinking: Option<Player>,
}

impl TerminalView {
    /// Creates a view showing an idle, empty board.
    pub fn new() -> Self {
        Self {
            snapshot: RenderSnapshot {
                board: [Cell::Empty; 9],
                p1_score: 0,
                p2_score: 0,
                current_player: Player::P1,
                phase: MatchPhase::Idle,
            },
            last_match: None,
            banner: None,
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            thinking: None,
        }
    }

    /// Latest snapshot.
    pub fn snapshot(&self) -> &RenderSnapshot {
        &self.snapshot
    }

    /// Final board and outcome of the most recent match.
    pub fn last_match(&self) -> Option<&([Cell; 9], MatchOutcome)> {
        self.last_match.as_ref()
    }

    /// Announcement for the last match or game end.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Mode shown in the header.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// AI tier shown in the header.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Status line for the current phase.
    pub fn status(&self) -> String {
        let snapshot = &self.snapshot;
        match snapshot.phase {
            MatchPhase::Idle => "Press a board key to start".to_string(),
            MatchPhase::GameEnd(winner) => format!("{winner} wins the game! Press v to reset"),
            _ if self.thinking == Some(snapshot.current_player) => {
                format!("{} is thinking...", snapshot.current_player)
            }
            _ => format!("{} to move", snapshot.current_player),
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalView {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        match snapshot.phase {
            MatchPhase::MatchEnd(outcome) => self.last_match = Some((snapshot.board, outcome)),
            MatchPhase::Idle => {
                self.last_match = None;
                self.banner = None;
            }
            _ => {}
        }
        if snapshot.current_player != self.snapshot.current_player {
            self.thinking = None;
        }
        self.snapshot = *snapshot;
    }

    fn show_match_end(&mut self, outcome: MatchOutcome) {
        debug!(%outcome, "Showing match end");
        self.banner = Some(match outcome {
            MatchOutcome::Win { line, winner } => format!("{winner} takes the match on {line}"),
            MatchOutcome::Draw => "Draw".to_string(),
        });
    }

    fn show_game_end(&mut self, winner: Player) {
        debug!(%winner, "Showing game end");
        self.banner = Some(format!("Game over: {winner} wins"));
    }

    fn show_mode(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.mode = mode;
        self.difficulty = difficulty;
    }

    fn ai_thinking(&mut self, side: Player) {
        self.thinking = Some(side);
    }
}
