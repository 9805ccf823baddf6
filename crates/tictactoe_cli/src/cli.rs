//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Difficulty};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a computer that cannot be beaten on hard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for the computer's random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Two humans share the board instead of playing the computer
        #[arg(long)]
        two_player: bool,
    },

    /// Score every move O could play on a board
    Analyze {
        /// Board as 9 cells of X, O and . (e.g. "XX..O....")
        board: Board,
    },

    /// Let the computer play O against random X moves
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Seed for both sides' random moves
        #[arg(long)]
        seed: Option<u64>,
    },
}
