//! tictactoe - play against an exhaustive minimax opponent.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{AppConfig, Cli, Command, analyze, make_rng, play, selfplay};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config)?;

    match cli.command {
        Command::Play {
            difficulty,
            seed,
            two_player,
        } => {
            let settings = config.settings(difficulty, seed, two_player);
            info!(?settings, "Starting play");
            let mut rng = make_rng(*settings.seed());
            play::run(&settings, &mut rng, io::stdin().lock(), io::stdout())?;
        }
        Command::Analyze { board } => analyze::run(&board, io::stdout())?,
        Command::Selfplay {
            games,
            difficulty,
            seed,
        } => {
            let settings = config.settings(difficulty, seed, false);
            let mut rng = make_rng(*settings.seed());
            let stats = selfplay::run(games, *settings.difficulty(), &mut rng)?;
            println!("Difficulty: {}", settings.difficulty());
            println!("{}", play::format_stats(&stats));
        }
    }

    Ok(())
}
