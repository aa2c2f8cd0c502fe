//! Tests for the match state machine.

use std::num::NonZeroU8;
use tateti_core::{
    Board, Cell, ColorSelector, Difficulty, GameConfig, GameMode, MatchController, MatchOutcome,
    MatchPhase, Palette, Player, Position, RecordingRenderer, RenderEvent, Rgb, SemanticAction,
    StartRule, WinLine,
};

type Controller = MatchController<RecordingRenderer, Palette>;

fn controller(config: GameConfig) -> Controller {
    MatchController::new(config, RecordingRenderer::new(), Palette::new())
}

fn at(index: usize) -> SemanticAction {
    SemanticAction::BoardPosition(Position::from_index(index).expect("index on board"))
}

fn play(controller: &mut Controller, indices: &[usize]) {
    for index in indices {
        controller.dispatch(at(*index));
    }
}

/// P1 completes Row0 when P1 opens.
const P1_OPENS_ROW0: [usize; 5] = [0, 4, 1, 5, 2];
/// P1 completes Row0 when P2 opens.
const P2_OPENS_P1_ROW0: [usize; 6] = [3, 0, 4, 1, 8, 2];

#[test]
fn test_row0_scenario_scores_and_clears() {
    let mut c = controller(GameConfig::default());
    c.dispatch(SemanticAction::Reset);
    assert_eq!(c.phase(), MatchPhase::Idle);

    play(&mut c, &P1_OPENS_ROW0[..4]);
    assert_eq!(c.phase(), MatchPhase::Playing);
    assert_eq!(c.current_player(), Player::P1);

    c.renderer_mut().take_events();
    c.dispatch(at(2));

    assert_eq!(c.score().p1, 1);
    assert_eq!(c.score().p2, 0);
    assert_eq!(*c.board(), Board::new());
    assert_eq!(c.phase(), MatchPhase::Playing);

    let events = c.renderer_mut().take_events();
    // The winning move is drawn, then the line is judged and scored.
    let RenderEvent::Frame(first) = events[0] else {
        panic!("expected a frame first, got {:?}", events[0]);
    };
    assert_eq!(first.phase, MatchPhase::CheckWin);
    assert_eq!(Board::from(first.board).check_win(), Some(WinLine::Row0));
    assert!(events.contains(&RenderEvent::MatchEnd(MatchOutcome::Win {
        line: WinLine::Row0,
        winner: Player::P1,
    })));
    let RenderEvent::Frame(last) = events[events.len() - 1] else {
        panic!("expected a frame last");
    };
    assert_eq!(last.phase, MatchPhase::Playing);
    assert_eq!(last.p1_score, 1);
    assert_eq!(last.board, [Cell::Empty; 9]);
}

#[test]
fn test_first_board_key_in_idle_starts_match_and_counts() {
    let mut c = controller(GameConfig::default());
    assert_eq!(c.phase(), MatchPhase::Idle);
    c.dispatch(at(4));
    assert_eq!(c.phase(), MatchPhase::Playing);
    assert_eq!(c.board().cell(Position::Center), Cell::Occupied(Player::P1));
    assert_eq!(c.current_player(), Player::P2);
}

#[test]
fn test_starting_player_alternates_by_default() {
    let mut c = controller(GameConfig::default());
    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.current_player(), Player::P2);
    assert_eq!(*c.state().starter(), Player::P2);

    play(&mut c, &P2_OPENS_P1_ROW0);
    assert_eq!(c.score().p1, 2);
    assert_eq!(c.current_player(), Player::P1);
}

#[test]
fn test_fixed_start_rule_keeps_player_one() {
    let mut c = controller(GameConfig::default().with_start_rule(StartRule::Fixed));
    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.current_player(), Player::P1);
    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.score().p1, 2);
}

#[test]
fn test_threshold_of_three_ends_game() {
    let mut c = controller(GameConfig::default());
    assert_eq!(c.config().score_threshold().get(), 3);

    play(&mut c, &P1_OPENS_ROW0);
    play(&mut c, &P2_OPENS_P1_ROW0);
    assert_eq!(c.phase(), MatchPhase::Playing);
    play(&mut c, &P1_OPENS_ROW0);

    assert_eq!(c.score().p1, 3);
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
    assert_eq!(
        c.renderer()
            .events()
            .iter()
            .filter(|e| matches!(e, RenderEvent::GameEnd(Player::P1)))
            .count(),
        1
    );

    // Board keys, mode and difficulty are ignored until reset.
    let before = c.board().snapshot();
    c.dispatch(at(4));
    c.dispatch(SemanticAction::ToggleMode);
    c.dispatch(SemanticAction::SetDifficulty(Difficulty::Hard));
    assert_eq!(c.board().snapshot(), before);
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
    assert_eq!(c.mode(), GameMode::PvP);
    assert_eq!(c.score().p1, 3);

    c.dispatch(SemanticAction::Reset);
    assert_eq!(c.phase(), MatchPhase::Idle);
    assert_eq!(c.score().p1, 0);
    assert_eq!(c.score().p2, 0);
    assert_eq!(c.current_player(), Player::P1);
}

#[test]
fn test_custom_threshold() {
    let mut c = controller(GameConfig::default().with_score_threshold(NonZeroU8::MIN));
    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
}

#[test]
fn test_single_win_threshold_crowns_the_match_winner() {
    let mut c = controller(GameConfig::default().with_score_threshold(NonZeroU8::MIN));
    // P2 completes Row1.
    play(&mut c, &[0, 3, 1, 4, 8, 5]);

    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P2));
    assert_eq!(c.score().p1, 0);
    assert_eq!(c.score().p2, 1);
    assert!(c.renderer().events().contains(&RenderEvent::GameEnd(Player::P2)));
    let last = c.renderer().frames().last().expect("frames recorded");
    assert_eq!(last.phase, MatchPhase::GameEnd(Player::P2));
    assert_eq!(last.p2_score, 1);
}

#[test]
fn test_draw_keeps_score() {
    let mut c = controller(GameConfig::default());
    // X O X / X O O / O X X
    play(&mut c, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(c.score().p1, 0);
    assert_eq!(c.score().p2, 0);
    assert_eq!(*c.board(), Board::new());
    assert_eq!(c.phase(), MatchPhase::Playing);
    assert_eq!(
        c.renderer().match_outcomes().collect::<Vec<_>>(),
        vec![MatchOutcome::Draw]
    );
    assert_eq!(c.current_player(), Player::P2);
}

#[test]
fn test_occupied_cell_is_silent_noop() {
    let mut c = controller(GameConfig::default());
    play(&mut c, &[4]);
    let before = c.state().clone();
    c.dispatch(at(4));
    assert_eq!(*c.state(), before);
    assert_eq!(c.current_player(), Player::P2);
    assert_eq!(c.phase(), MatchPhase::Playing);
    assert!(
        !c.renderer()
            .events()
            .iter()
            .any(|e| matches!(e, RenderEvent::MatchEnd(_)))
    );
}

#[test]
fn test_none_action_is_noop() {
    let mut c = controller(GameConfig::default());
    play(&mut c, &[0]);
    let before = c.state().clone();
    c.dispatch(SemanticAction::None);
    assert_eq!(*c.state(), before);
}

#[test]
fn test_reset_mid_match_zeroes_score() {
    let mut c = controller(GameConfig::default());
    play(&mut c, &P1_OPENS_ROW0);
    play(&mut c, &[3, 0]);
    c.dispatch(SemanticAction::Reset);
    assert_eq!(c.phase(), MatchPhase::Idle);
    assert_eq!(c.score().p1, 0);
    assert_eq!(*c.board(), Board::new());
    assert!(c.state().history().is_empty());
}

#[test]
fn test_mode_and_difficulty_only_change_in_idle() {
    let mut c = controller(GameConfig::default());
    assert_eq!(c.mode(), GameMode::PvP);
    assert_eq!(c.difficulty(), Difficulty::Medium);

    // Difficulty keys are ignored in PvP.
    c.dispatch(SemanticAction::SetDifficulty(Difficulty::Hard));
    assert_eq!(c.difficulty(), Difficulty::Medium);

    c.dispatch(SemanticAction::ToggleMode);
    assert_eq!(c.mode(), GameMode::PvAi);
    c.dispatch(SemanticAction::SetDifficulty(Difficulty::Easy));
    assert_eq!(c.difficulty(), Difficulty::Easy);
    assert_eq!(c.phase(), MatchPhase::Idle);
    assert!(
        c.renderer()
            .events()
            .contains(&RenderEvent::Mode(GameMode::PvAi, Difficulty::Easy))
    );

    c.dispatch(at(4));
    assert_eq!(c.phase(), MatchPhase::Playing);
    c.dispatch(SemanticAction::ToggleMode);
    c.dispatch(SemanticAction::SetDifficulty(Difficulty::Hard));
    assert_eq!(c.mode(), GameMode::PvAi);
    assert_eq!(c.difficulty(), Difficulty::Easy);

    // Settings survive a reset.
    c.dispatch(SemanticAction::Reset);
    assert_eq!(c.mode(), GameMode::PvAi);
    assert_eq!(c.difficulty(), Difficulty::Easy);
}

#[test]
fn test_color_actions_reach_palette_in_every_phase() {
    let mut c = controller(GameConfig::default().with_score_threshold(NonZeroU8::MIN));
    c.dispatch(SemanticAction::ChangeColorP1);
    assert_eq!(c.colors().player1_name(), "green");

    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
    c.dispatch(SemanticAction::ChangeColorP2);
    assert_eq!(c.colors().player2_name(), "yellow");
    assert_ne!(c.colors().player1_color(), c.colors().player2_color());
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
}

#[test]
fn test_color_keys_announce_both_colors() {
    let mut c = controller(GameConfig::default());
    c.refresh();
    assert!(
        c.renderer()
            .events()
            .contains(&RenderEvent::Colors(Rgb::new(50, 0, 0), Rgb::new(0, 0, 50)))
    );

    c.renderer_mut().take_events();
    c.dispatch(SemanticAction::ChangeColorP1);
    let events = c.renderer_mut().take_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0], RenderEvent::Colors(Rgb::new(0, 50, 0), Rgb::new(0, 0, 50)));
    // A colour key leaves the board as it was.
    let RenderEvent::Frame(frame) = events[1] else {
        panic!("expected a frame after the colours, got {:?}", events[1]);
    };
    assert_eq!(frame.board, [Cell::Empty; 9]);
    assert_eq!(c.phase(), MatchPhase::Idle);
}

#[test]
fn test_ai_answers_within_same_dispatch() {
    let config = GameConfig::default()
        .with_mode(GameMode::PvAi)
        .with_difficulty(Difficulty::Medium);
    let mut c = controller(config);

    c.dispatch(at(0));
    // Medium takes the center.
    assert_eq!(c.board().cell(Position::Center), Cell::Occupied(Player::P2));
    assert_eq!(c.current_player(), Player::P1);
    assert_eq!(c.phase(), MatchPhase::Playing);
    assert!(
        c.renderer()
            .events()
            .contains(&RenderEvent::AiThinking(Player::P2))
    );

    c.dispatch(at(1));
    // Medium blocks Row0.
    assert_eq!(c.board().cell(Position::TopRight), Cell::Occupied(Player::P2));
    assert_eq!(c.state().history().len(), 4);
}

#[test]
fn test_ai_opens_when_it_starts() {
    let config = GameConfig::default()
        .with_mode(GameMode::PvAi)
        .with_difficulty(Difficulty::Hard)
        .with_ai_side(Player::P1);
    let mut c = controller(config);

    c.dispatch(at(8));
    // The key only starts the match; the AI plays the first mark.
    assert_eq!(c.board().filled(), 1);
    assert_eq!(c.board().cell(Position::TopLeft), Cell::Occupied(Player::P1));
    assert!(c.board().is_valid_move(8));
    assert_eq!(c.current_player(), Player::P2);
}

#[test]
fn test_hard_ai_never_loses_a_match_in_controller() {
    let config = GameConfig::default()
        .with_mode(GameMode::PvAi)
        .with_difficulty(Difficulty::Hard);
    let mut c = controller(config);

    for _ in 0..200 {
        if let MatchPhase::GameEnd(_) = c.phase() {
            break;
        }
        // Human plays the last free cell.
        let pos = *Position::valid_moves(c.board())
            .last()
            .expect("playing board has room");
        c.dispatch(SemanticAction::BoardPosition(pos));
        assert_eq!(c.score().p1, 0);
    }
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P2));
    assert_eq!(c.score().p2, 3);
}

#[test]
fn test_completion_states_never_escape_a_dispatch() {
    let config = GameConfig::default()
        .with_mode(GameMode::PvAi)
        .with_difficulty(Difficulty::Easy)
        .with_seed(5);
    let mut c = controller(config);

    for step in 0..300 {
        if let MatchPhase::GameEnd(_) = c.phase() {
            c.dispatch(SemanticAction::Reset);
        }
        let free = Position::valid_moves(c.board());
        c.dispatch(SemanticAction::BoardPosition(free[step % free.len()]));

        assert!(!c.phase().is_transient(), "escaped with {}", c.phase());
        let events = c.renderer_mut().take_events();
        let Some(RenderEvent::Frame(last)) = events.last() else {
            panic!("dispatch must end with a frame");
        };
        assert!(!last.phase.is_transient());
        // Each announced win was scored before the final frame.
        for event in &events {
            if let RenderEvent::MatchEnd(outcome) = event {
                assert!(outcome.winner().is_none_or(|w| last.score().get(w) > 0));
            }
        }
        assert!(c.state().history_consistent());
    }
}

#[test]
fn test_game_end_clears_board_for_next_game() {
    let mut c = controller(GameConfig::default().with_score_threshold(NonZeroU8::MIN));
    play(&mut c, &P1_OPENS_ROW0);
    assert_eq!(c.phase(), MatchPhase::GameEnd(Player::P1));
    assert_eq!(*c.board(), Board::new());
    c.dispatch(SemanticAction::Reset);
    play(&mut c, &[4]);
    assert_eq!(c.board().cell(Position::Center), Cell::Occupied(Player::P1));
}
