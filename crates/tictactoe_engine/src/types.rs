//! Core domain types for tic-tac-toe.

use crate::action::MoveError;
use crate::rules::{self, Outcome, WinningLine};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, the human in a game against the computer).
    X,
    /// Player O (goes second, the computer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol drawn for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: placing a mark yields a new board and leaves
/// the input board untouched, so search branches never see each other's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from its squares in row-major order.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns true if `pos` is on the board and unoccupied.
    pub fn is_valid_move(&self, pos: usize) -> bool {
        pos < BOARD_SIZE && self.is_empty(pos)
    }

    /// Returns a new board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for positions past 8 and
    /// [`MoveError::SquareOccupied`] if the square already holds a mark.
    /// An occupied square is never overwritten.
    pub fn apply_move(&self, pos: usize, player: Player) -> Result<Self, MoveError> {
        match self.get(pos) {
            None => Err(MoveError::OutOfBounds(pos)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(pos)),
            Some(Square::Empty) => {
                let mut next = *self;
                next.squares[pos] = Square::Occupied(player);
                Ok(next)
            }
        }
    }

    /// Returns all empty positions in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Yields every board reachable by `player` placing one mark, paired
    /// with the square played, in ascending square order.
    pub fn successors(&self, player: Player) -> impl Iterator<Item = (usize, Board)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(move |(pos, _)| {
                let mut next = *self;
                next.squares[pos] = Square::Occupied(player);
                (pos, next)
            })
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Returns the player whose turn it is, assuming X moved first.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board. See [`rules::evaluate_outcome`].
    pub fn outcome(&self) -> Outcome {
        rules::evaluate_outcome(self)
    }

    /// Returns the completed line, if any. See [`rules::winning_line`].
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::winning_line(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so a human can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (pos, square) in self.squares.iter().enumerate() {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
            if pos % 3 == 2 && pos < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Invalid board character {:?}", _0)]
    InvalidCell(char),

    /// The text held the wrong number of cells.
    #[display("Board needs 9 cells, found {}", _0)]
    WrongLength(usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses `X`/`O` marks and `.`, `-` or `_` for empty squares.
    /// Whitespace and `|` are ignored, so both `"XX.OO...."` and the
    /// multi-line [`Display`](std::fmt::Display) form parse.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::X)),
                'O' | 'o' => Ok(Square::Occupied(Player::O)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(ParseBoardError::InvalidCell(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; BOARD_SIZE] = cells
            .as_slice()
            .try_into()
            .map_err(|_| ParseBoardError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}
