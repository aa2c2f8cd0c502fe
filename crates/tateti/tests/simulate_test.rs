//! End-to-end runs of the headless simulation.

use clap::Parser;
use tateti::{Cli, Command, simulate};
use tateti_core::{Difficulty, GameConfig, Player};

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Easy)
        .with_seed(42);
    let first = simulate(config.clone(), 10, Difficulty::Easy).unwrap();
    let second = simulate(config, 10, Difficulty::Easy).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.games, 10);
    assert_eq!(
        first.p1_games + first.p2_games + first.abandoned,
        first.games
    );
    assert_eq!(
        first.p1_matches + first.p2_matches + first.draws,
        first.matches
    );
}

#[test]
fn test_medium_beats_easy_more_often_than_not() {
    let config = GameConfig::default()
        .with_difficulty(Difficulty::Medium)
        .with_seed(7);
    let report = simulate(config, 20, Difficulty::Easy).unwrap();
    assert!(report.games_won(Player::P2) > report.games_won(Player::P1));
}

#[test]
fn test_config_file_feeds_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tateti.toml");
    std::fs::write(
        &path,
        "score_threshold = 1\ndifficulty = \"hard\"\nai_side = \"p1\"\nseed = 4\n",
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "tateti",
        "simulate",
        "--games",
        "3",
        "--opponent",
        "easy",
        "--config",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let Some(Command::Simulate { games, opponent }) = cli.command else {
        panic!("expected simulate");
    };
    let config = cli.game.resolve().unwrap();
    assert_eq!(*config.ai_side(), Player::P1);

    let report = simulate(config, games, opponent).unwrap();
    assert_eq!(report.games, 3);
    // The AI plays X and never loses.
    assert_eq!(report.p2_matches, 0);
}
