//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that win when a single player fills them.
///
/// Declaration order is the scan order used by [`check_winner`] and
/// [`winning_line`]: rows, then columns, then diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum WinningLine {
    /// Squares 0, 1, 2.
    TopRow,
    /// Squares 3, 4, 5.
    MiddleRow,
    /// Squares 6, 7, 8.
    BottomRow,
    /// Squares 0, 3, 6.
    LeftColumn,
    /// Squares 1, 4, 7.
    CenterColumn,
    /// Squares 2, 5, 8.
    RightColumn,
    /// Squares 0, 4, 8.
    MainDiagonal,
    /// Squares 2, 4, 6.
    AntiDiagonal,
}

impl WinningLine {
    /// Board indices covered by this line, in ascending order.
    pub fn indices(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Returns true if `pos` lies on this line.
    pub fn contains(self, pos: usize) -> bool {
        self.indices().contains(&pos)
    }

    /// Returns the player holding all three squares of this line.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.indices();
        let sq = board.get(a);
        if sq == board.get(b) && sq == board.get(c)
            && let Some(Square::Occupied(player)) = sq
        {
            return Some(player);
        }
        None
    }
}

/// Finds the first completed line together with its owner.
fn first_completed(board: &Board) -> Option<(WinningLine, Player)> {
    WinningLine::iter().find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_completed(board).map(|(_, player)| player)
}

/// Returns the completed line, for highlighting.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    first_completed(board).map(|(line, _)| line)
}
