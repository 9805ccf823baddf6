//! Engine-versus-random matches.

use anyhow::Result;
use rand::Rng;
use tictactoe_engine::{Difficulty, Game, GameMode, GameStats, random_move};
use tracing::{debug, info, instrument};

/// Plays `games` games of the engine (O) against uniformly random X moves.
#[instrument(skip(rng))]
pub fn run<G: Rng + ?Sized>(games: u32, difficulty: Difficulty, rng: &mut G) -> Result<GameStats> {
    let mut stats = GameStats::new();

    for n in 0..games {
        let mut game = Game::new(GameMode::VsComputer, difficulty);
        while !game.is_over() {
            if game.is_computer_turn() {
                game.play_computer(rng)?;
            } else {
                let chosen = random_move(game.board(), rng)?;
                game.play(chosen.index)?;
            }
        }
        debug!(game = n, outcome = %game.outcome(), "Self-play game finished");
        stats.record(*game.outcome());
    }

    info!(
        ai_wins = stats.ai_wins(),
        player_wins = stats.player_wins(),
        ties = stats.ties(),
        "Self-play complete"
    );
    Ok(stats)
}
