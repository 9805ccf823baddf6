//! Interactive terminal game loop.

use crate::config::Settings;
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{Game, GameMode, GameStats, Outcome, Player};
use tracing::{debug, info, instrument, warn};

/// Status line shown under the board.
#[instrument(skip(game))]
pub fn status_message(game: &Game) -> String {
    let vs_computer = *game.mode() == GameMode::VsComputer;
    match (*game.outcome(), vs_computer) {
        (Outcome::Won(Player::X), true) => "You won!".to_string(),
        (Outcome::Won(Player::O), true) => "AI wins!".to_string(),
        (Outcome::Won(player), false) => format!("{} wins!", player),
        (Outcome::Tie, _) => "It's a tie!".to_string(),
        (Outcome::Undecided, true) if game.is_computer_turn() => "AI's turn (O)".to_string(),
        (Outcome::Undecided, true) => "Your turn (X)".to_string(),
        (Outcome::Undecided, false) => format!("{} to move", game.to_move()),
    }
}

/// Formats the running tally.
pub fn format_stats(stats: &GameStats) -> String {
    format!(
        "Your wins: {}   AI wins: {}   Ties: {}   Games: {}   Win rate: {}%",
        stats.player_wins(),
        stats.ai_wins(),
        stats.ties(),
        stats.games_played(),
        stats.win_rate()
    )
}

/// Runs games until the player quits or input ends.
///
/// Squares are entered as 1-9, `n` starts a new game and `q` quits.
/// Returns the tally of finished games.
#[instrument(skip_all, fields(mode = ?settings.mode(), difficulty = %settings.difficulty()))]
pub fn run<R, W, G>(settings: &Settings, rng: &mut G, input: R, mut output: W) -> Result<GameStats>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut game = Game::new(*settings.mode(), *settings.difficulty());
    let mut stats = GameStats::new();
    let mut lines = input.lines();

    info!("Starting interactive game");
    writeln!(output, "Difficulty: {}", game.difficulty())?;

    loop {
        writeln!(output, "\n{}\n\n{}", game.board().display(), status_message(&game))?;

        if game.is_computer_turn() {
            if !settings.think_delay().is_zero() {
                std::thread::sleep(*settings.think_delay());
            }
            let chosen = game.play_computer(rng)?;
            writeln!(output, "AI plays {}", chosen.index + 1)?;
            finish_if_over(&game, &mut stats, &mut output)?;
            continue;
        }

        if game.is_over() {
            writeln!(output, "Enter n for a new game or q to quit.")?;
        } else {
            writeln!(output, "Enter a square (1-9), n for a new game or q to quit.")?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line?;

        match line.trim() {
            "q" | "quit" => break,
            "n" | "new" => {
                game.reset();
                writeln!(output, "New game.")?;
            }
            entry => match entry.parse::<usize>() {
                Ok(square @ 1..=9) => match game.play(square - 1) {
                    Ok(_) => finish_if_over(&game, &mut stats, &mut output)?,
                    Err(e) => {
                        warn!(error = %e, "Rejected move");
                        writeln!(output, "{}", e)?;
                    }
                },
                _ => writeln!(output, "Unknown input {:?}", entry)?,
            },
        }
    }

    writeln!(output, "{}", format_stats(&stats))?;
    Ok(stats)
}

/// Records and reports a game that just ended.
fn finish_if_over<W: Write>(game: &Game, stats: &mut GameStats, output: &mut W) -> Result<()> {
    if game.is_over() {
        stats.record(*game.outcome());
        if let Some(line) = game.winning_line() {
            let squares = line.indices().map(|i| (i + 1).to_string()).join("-");
            writeln!(output, "Winning line: {}", squares)?;
        }
        writeln!(output, "{}", format_stats(stats))?;
    }
    Ok(())
}
