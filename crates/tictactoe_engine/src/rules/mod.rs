//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according
//! to tic-tac-toe rules. Rules are separated from board storage so the
//! search can call them at every node without touching session state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinningLine, check_winner, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// Always derived from a board, never tracked on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    Undecided,
    /// The player completed a line.
    Won(Player),
    /// Every square is taken and nobody won.
    Tie,
}

impl Outcome {
    /// Returns true for wins and ties.
    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "in progress"),
            Outcome::Won(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Evaluates the board.
///
/// Lines are scanned in [`WinningLine`] order and the first uniformly
/// marked line decides the winner. A full board without a line is a tie,
/// anything else is undecided.
#[instrument(level = "trace", skip(board))]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(player) = check_winner(board) {
        Outcome::Won(player)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_undecided() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::Undecided);
    }

    #[test]
    fn test_win_for_each_player() {
        assert_eq!(evaluate_outcome(&board("XXXOO....")), Outcome::Won(Player::X));
        assert_eq!(evaluate_outcome(&board("XX.OOOX..")), Outcome::Won(Player::O));
    }

    #[test]
    fn test_full_board_tie() {
        assert_eq!(evaluate_outcome(&board("XOXOXXOXO")), Outcome::Tie);
    }

    #[test]
    fn test_win_on_full_board_is_not_tie() {
        // X completes the left column with the last move.
        assert_eq!(evaluate_outcome(&board("XOXXOOXXO")), Outcome::Won(Player::X));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::Undecided.is_decided());
        assert!(Outcome::Tie.is_decided());
        assert_eq!(Outcome::Won(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Tie.winner(), None);
    }
}
