//! Game session: turn order, game-over detection and settings.
//!
//! The session is what a front-end drives. It owns one board at a time,
//! replaces it with a fresh value after every move, and asks the search
//! engine for the computer's replies.

use crate::action::{GameError, Move, MoveError};
use crate::difficulty::Difficulty;
use crate::rules::{Outcome, WinningLine};
use crate::search::select_move;
use crate::types::{Board, Player};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who controls O.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// A human plays X against the computer playing O.
    #[default]
    VsComputer,
    /// Two humans share the board.
    TwoPlayer,
}

/// A single game of tic-tac-toe. X always moves first.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Game {
    /// The current board.
    board: Board,
    /// Player to move.
    to_move: Player,
    /// Outcome of the current board.
    outcome: Outcome,
    /// Line to highlight once somebody has won.
    winning_line: Option<WinningLine>,
    /// Squares played, in order.
    history: Vec<usize>,
    /// Who controls O.
    mode: GameMode,
    /// Strength of the computer opponent.
    difficulty: Difficulty,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            outcome: Outcome::Undecided,
            winning_line: None,
            history: Vec::new(),
            mode,
            difficulty,
        }
    }

    /// Returns true once the game has been won or tied.
    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Returns true if the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer && self.to_move == Player::O && !self.is_over()
    }

    /// Places the mark of the player to move.
    ///
    /// Against the computer only X can be played through this method;
    /// use [`Game::play_computer`] for O.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has ended
    /// - [`MoveError::WrongPlayer`] if it is the computer's turn
    /// - [`MoveError::OutOfBounds`] / [`MoveError::SquareOccupied`] for
    ///   squares that cannot be played
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: usize) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(Player::O));
        }
        self.place(pos)
    }

    /// Lets the computer play O.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the game has ended and
    /// [`MoveError::WrongPlayer`] outside the computer's turn.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn play_computer<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, GameError> {
        if self.is_over() {
            return Err(MoveError::GameOver.into());
        }
        if !self.is_computer_turn() {
            return Err(MoveError::WrongPlayer(self.to_move).into());
        }

        let chosen = select_move(&self.board, self.difficulty, rng)?;
        self.place(chosen.index)?;
        Ok(chosen)
    }

    /// Starts over with an empty board, keeping mode and difficulty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new(self.mode, self.difficulty);
    }

    /// Changes the computer's strength.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameInProgress`] once a move has been made,
    /// until the game is over.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), MoveError> {
        if !self.history.is_empty() && !self.is_over() {
            return Err(MoveError::GameInProgress);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Switches who controls O and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    fn place(&mut self, pos: usize) -> Result<Outcome, MoveError> {
        let player = self.to_move;
        self.board = self.board.apply_move(pos, player)?;
        self.history.push(pos);
        self.outcome = self.board.outcome();
        self.winning_line = self.board.winning_line();

        if self.is_over() {
            info!(outcome = %self.outcome, moves = self.history.len(), "Game over");
        } else {
            self.to_move = player.opponent();
        }
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}
