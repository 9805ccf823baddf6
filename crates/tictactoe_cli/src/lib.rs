//! Terminal front-end for the tic-tac-toe engine.
//!
//! - **play**: interactive game against the computer or a second human
//! - **analyze**: search scores for a board given on the command line
//! - **selfplay**: engine against random moves, for sanity checks

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analyze;
pub mod cli;
pub mod config;
pub mod play;
pub mod selfplay;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH, Settings};

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Builds the random source, seeded when a seed is configured.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
