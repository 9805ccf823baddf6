//! Move and error types shared by the board, the search and the session.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move chosen for the computer.
///
/// `score` is the search's evaluation from the computer's point of view.
/// It is `None` when the move was picked at random instead of searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target square (0-8).
    pub index: usize,
    /// Search score, absent for random moves.
    pub score: Option<i32>,
}

impl Move {
    /// Creates a move backed by a search score.
    pub fn scored(index: usize, score: i32) -> Self {
        Self {
            index,
            score: Some(score),
        }
    }

    /// Creates a move picked without searching.
    pub fn random(index: usize) -> Self {
        Self { index, score: None }
    }

    /// Returns the target square.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the search score, if the move was searched.
    pub fn score(&self) -> Option<i32> {
        self.score
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.score {
            Some(score) => write!(f, "square {} (score {})", self.index, score),
            None => write!(f, "square {} (random)", self.index),
        }
    }
}

/// Error that can occur when validating or applying a move.
///
/// These are caller bugs: check [`Board::is_valid_move`](crate::Board::is_valid_move)
/// and the game status before placing a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The position is not on the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// Settings are locked while a game is being played.
    #[display("Cannot change settings while a game is in progress")]
    GameInProgress,
}

impl std::error::Error for MoveError {}

/// Error raised when the engine is asked for a move it cannot produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is full.
    #[display("No available moves")]
    NoMovesAvailable,
}

impl std::error::Error for SearchError {}

/// Any error from a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Placing a mark failed.
    #[display("{}", _0)]
    Move(MoveError),
    /// The engine could not pick a move.
    #[display("{}", _0)]
    Search(SearchError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Search(e) => Some(e),
        }
    }
}
