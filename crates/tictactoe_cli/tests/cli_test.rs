//! Tests for argument parsing and configuration loading.

use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tictactoe_cli::{AppConfig, Cli, Command};
use tictactoe_engine::{Board, Difficulty, GameMode};

#[test]
fn test_parse_play_flags() {
    let cli = Cli::try_parse_from(["tictactoe", "play", "--difficulty", "easy", "--seed", "7"])
        .unwrap();
    match cli.command {
        Command::Play {
            difficulty,
            seed,
            two_player,
        } => {
            assert_eq!(difficulty, Some(Difficulty::Easy));
            assert_eq!(seed, Some(7));
            assert!(!two_player);
        }
        other => panic!("Unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_analyze_board() {
    let cli = Cli::try_parse_from(["tictactoe", "analyze", "XX..O...."]).unwrap();
    match cli.command {
        Command::Analyze { board } => {
            assert_eq!(board, "XX..O....".parse::<Board>().unwrap());
        }
        other => panic!("Unexpected command {:?}", other),
    }
}

#[test]
fn test_rejects_bad_board_and_difficulty() {
    assert!(Cli::try_parse_from(["tictactoe", "analyze", "XX"]).is_err());
    assert!(Cli::try_parse_from(["tictactoe", "play", "-d", "impossible"]).is_err());
}

#[test]
fn test_selfplay_defaults() {
    let cli = Cli::try_parse_from(["tictactoe", "selfplay", "--config", "custom.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    match cli.command {
        Command::Selfplay { games, difficulty, seed } => {
            assert_eq!(games, 100);
            assert_eq!(difficulty, None);
            assert_eq!(seed, None);
        }
        other => panic!("Unexpected command {:?}", other),
    }
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "difficulty = \"medium\"\nseed = 99\nthink_delay_ms = 0\nmode = \"two-player\""
    )
    .unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.think_delay_ms(), 0);
    assert_eq!(*config.mode(), GameMode::TwoPlayer);
}

#[test]
fn test_config_defaults_for_missing_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 1").unwrap();

    let config = AppConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.think_delay_ms(), 500);
    assert_eq!(*config.mode(), GameMode::VsComputer);
}

#[test]
fn test_config_errors() {
    let missing = AppConfig::load(Some("/nonexistent/tictactoe.toml".into()));
    let err = missing.unwrap_err();
    assert!(err.message.contains("Failed to read config file"));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "difficulty = \"impossible\"").unwrap();
    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse config"));
}

#[test]
fn test_flags_override_config() {
    let config = AppConfig::default();
    let settings = config.settings(Some(Difficulty::Easy), Some(3), true);
    assert_eq!(*settings.difficulty(), Difficulty::Easy);
    assert_eq!(*settings.seed(), Some(3));
    assert_eq!(*settings.mode(), GameMode::TwoPlayer);
    assert_eq!(*settings.think_delay(), Duration::from_millis(500));

    let settings = config.settings(None, None, false);
    assert_eq!(*settings.difficulty(), Difficulty::Hard);
    assert_eq!(*settings.mode(), GameMode::VsComputer);
}
