//! Board analysis: every move O could play, with its score.

use anyhow::Result;
use std::io::Write;
use tictactoe_engine::{Board, Difficulty, select_move, score_moves};
use tracing::instrument;

/// Prints the search score of each empty square and the move the
/// engine would play on hard.
#[instrument(skip(output), fields(board = %board))]
pub fn run<W: Write>(board: &Board, mut output: W) -> Result<()> {
    writeln!(output, "{}\n", board.display())?;

    let outcome = board.outcome();
    if outcome.is_decided() {
        writeln!(output, "Game over: {}", outcome)?;
        return Ok(());
    }

    for candidate in score_moves(board) {
        if let Some(score) = candidate.score {
            writeln!(output, "square {}: {:+}", candidate.index + 1, score)?;
        }
    }

    // Hard never draws from the rng.
    let best = select_move(board, Difficulty::Hard, &mut rand::rng())?;
    writeln!(output, "best: square {}", best.index + 1)?;
    Ok(())
}
