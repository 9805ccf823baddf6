//! Tic-tac-toe with an unbeatable computer opponent.
//!
//! The crate is pure game logic with no I/O:
//!
//! - **Board model**: [`Board`] values, [`rules`] for wins and ties
//! - **Search**: [`select_move`] runs exhaustive minimax with alpha-beta
//!   pruning, perturbed by [`Difficulty`]
//! - **Session**: [`Game`] enforces turn order for a front-end
//! - **Statistics**: [`GameStats`] tallies finished games
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_engine::{Board, Difficulty, Player, select_move};
//!
//! let board: Board = "XX..O....".parse()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let reply = select_move(&board, Difficulty::Hard, &mut rng)?;
//! assert_eq!(reply.index, 2);
//!
//! let board = board.apply_move(reply.index, Player::O)?;
//! assert!(!board.outcome().is_decided());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod difficulty;
mod game;
pub mod rules;
pub mod search;
mod stats;
mod types;

pub use action::{GameError, Move, MoveError, SearchError};
pub use difficulty::Difficulty;
pub use game::{Game, GameMode};
pub use rules::{Outcome, WinningLine, evaluate_outcome, winning_line};
pub use search::{Searcher, random_move, score_moves, search, select_move};
pub use stats::GameStats;
pub use types::{BOARD_SIZE, Board, ParseBoardError, Player, Square};
