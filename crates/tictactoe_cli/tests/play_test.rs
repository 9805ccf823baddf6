//! Tests for the terminal game loop, analysis and self-play.

use std::io::Cursor;
use std::time::Duration;
use tictactoe_cli::{Settings, analyze, make_rng, play, selfplay};
use tictactoe_engine::{Board, Difficulty, GameMode};

fn settings(mode: GameMode, difficulty: Difficulty) -> Settings {
    Settings::new(mode, difficulty, Some(1), Duration::ZERO)
}

fn run_script(settings: &Settings, script: &str) -> (tictactoe_engine::GameStats, String) {
    let mut output = Vec::new();
    let mut rng = make_rng(*settings.seed());
    let stats = play::run(settings, &mut rng, Cursor::new(script), &mut output).unwrap();
    (stats, String::from_utf8(output).unwrap())
}

#[test]
fn test_two_player_game_to_win() {
    let settings = settings(GameMode::TwoPlayer, Difficulty::Hard);
    let (stats, output) = run_script(&settings, "1\n4\n2\n5\n3\nq\n");

    assert_eq!(*stats.player_wins(), 1);
    assert_eq!(*stats.games_played(), 1);
    assert!(output.contains("X wins!"));
    assert!(output.contains("Winning line: 1-2-3"));
}

#[test]
fn test_rejected_input_is_reported() {
    let settings = settings(GameMode::TwoPlayer, Difficulty::Hard);
    let (stats, output) = run_script(&settings, "5\n5\n0\nabc\nq\n");

    assert_eq!(*stats.games_played(), 0);
    assert!(output.contains("Square 4 is already occupied"));
    assert!(output.contains("Unknown input \"0\""));
    assert!(output.contains("Unknown input \"abc\""));
}

#[test]
fn test_computer_replies_and_input_end_stops() {
    let settings = settings(GameMode::VsComputer, Difficulty::Hard);
    // No quit command: the loop ends when input runs out.
    let (stats, output) = run_script(&settings, "5\n");

    assert_eq!(*stats.player_wins(), 0);
    assert!(output.contains("Your turn (X)"));
    assert!(output.contains("AI plays"));
    assert!(output.contains("Games: 0"));
}

#[test]
fn test_hard_computer_cannot_be_beaten_by_script() {
    let settings = settings(GameMode::VsComputer, Difficulty::Hard);
    // Try every square in order, repeatedly, across two games.
    let mut script = String::new();
    for _ in 0..3 {
        for square in 1..=9 {
            script.push_str(&format!("{}\n", square));
        }
    }
    script.push_str("n\n");
    for square in (1..=9).rev() {
        script.push_str(&format!("{}\n", square));
    }
    script.push_str("q\n");

    let (stats, output) = run_script(&settings, &script);
    assert_eq!(*stats.player_wins(), 0);
    assert!(output.contains("New game."));
}

#[test]
fn test_new_game_command() {
    let settings = settings(GameMode::TwoPlayer, Difficulty::Hard);
    let (_, output) = run_script(&settings, "1\nn\n1\nq\n");
    assert!(output.contains("New game."));
    assert!(!output.contains("already occupied"));
}

#[test]
fn test_analyze_output() {
    let board: Board = "XX..O....".parse().unwrap();
    let mut output = Vec::new();
    analyze::run(&board, &mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("square 3: +0"));
    assert!(output.contains("square 4: -9"));
    assert!(output.contains("best: square 3"));
}

#[test]
fn test_analyze_finished_board() {
    let board: Board = "XXXOO....".parse().unwrap();
    let mut output = Vec::new();
    analyze::run(&board, &mut output).unwrap();
    assert!(String::from_utf8(output).unwrap().contains("Game over: X wins"));
}

#[test]
fn test_selfplay_hard_never_loses() {
    let mut rng = make_rng(Some(5));
    let stats = selfplay::run(40, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(*stats.games_played(), 40);
    assert_eq!(*stats.player_wins(), 0);
    assert!(*stats.ai_wins() > 0);
}
