//! Headless self-play.
//!
//! The controller runs in PvAI mode with its own AI on `ai_side`. A second
//! engine stands in for the human and presses the keypad key of the cell it
//! picks, so every move travels the same path as a real key press.

use anyhow::{Result, bail};
use derive_more::Display;
use tateti_core::{
    AiEngine, Difficulty, GameConfig, GameMode, MatchController, MatchOutcome, MatchPhase,
    Palette, Player, RecordingRenderer, RenderEvent, SemanticAction, classify, key_for_position,
};
use tracing::{debug, info, instrument};

/// Matches played before a game with no champion is abandoned.
pub const MAX_MATCHES_PER_GAME: u32 = 20;

/// Tally of a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display(
    "games: {games} (P1 {p1_games}, P2 {p2_games}, abandoned {abandoned}) | matches: {matches} (P1 {p1_matches}, P2 {p2_matches}, draws {draws})"
)]
pub struct SimulationReport {
    /// Games started.
    pub games: u32,
    /// Games won by player one.
    pub p1_games: u32,
    /// Games won by player two.
    pub p2_games: u32,
    /// Games stopped after [`MAX_MATCHES_PER_GAME`] matches.
    pub abandoned: u32,
    /// Matches played across all games.
    pub matches: u32,
    /// Matches won by player one.
    pub p1_matches: u32,
    /// Matches won by player two.
    pub p2_matches: u32,
    /// Drawn matches.
    pub draws: u32,
}

impl SimulationReport {
    fn record_match(&mut self, outcome: MatchOutcome) {
        self.matches += 1;
        match outcome.winner() {
            Some(Player::P1) => self.p1_matches += 1,
            Some(Player::P2) => self.p2_matches += 1,
            None => self.draws += 1,
        }
    }

    fn record_game(&mut self, champion: Option<Player>) {
        self.games += 1;
        match champion {
            Some(Player::P1) => self.p1_games += 1,
            Some(Player::P2) => self.p2_games += 1,
            None => self.abandoned += 1,
        }
    }

    /// Games won by `player`.
    pub fn games_won(&self, player: Player) -> u32 {
        match player {
            Player::P1 => self.p1_games,
            Player::P2 => self.p2_games,
        }
    }
}

/// Plays `games` full games and tallies the results.
#[instrument(skip(config), fields(ai = %config.difficulty(), ai_side = %config.ai_side()))]
pub fn simulate(config: GameConfig, games: u32, opponent: Difficulty) -> Result<SimulationReport> {
    let config = config.with_mode(GameMode::PvAi);
    let human = config.ai_side().opponent();
    let mut driver = match config.seed() {
        Some(seed) => AiEngine::seeded(seed.wrapping_add(1)),
        None => AiEngine::new(),
    };
    let mut controller = MatchController::new(config, RecordingRenderer::new(), Palette::new());
    let mut report = SimulationReport::default();

    for game in 0..games {
        controller.dispatch(SemanticAction::Reset);
        controller.renderer_mut().take_events();
        let mut played = 0;

        let champion = loop {
            match controller.phase() {
                MatchPhase::GameEnd(champion) => break Some(champion),
                MatchPhase::Idle | MatchPhase::Playing => {}
                phase => bail!("controller left in transient phase {phase}"),
            }

            let board = *controller.board();
            let Some(pos) = driver.calculate_move(&board, opponent, human) else {
                bail!("no free cell for the human side:\n{}", board.display());
            };
            controller.dispatch(classify(key_for_position(pos)));

            for event in controller.renderer_mut().take_events() {
                if let RenderEvent::MatchEnd(outcome) = event {
                    report.record_match(outcome);
                    played += 1;
                }
            }
            let decided = matches!(controller.phase(), MatchPhase::GameEnd(_));
            if played >= MAX_MATCHES_PER_GAME && !decided {
                break None;
            }
        };

        debug!(game, played, ?champion, "Game finished");
        report.record_game(champion);
    }

    info!(%report, "Simulation complete");
    Ok(report)
}
