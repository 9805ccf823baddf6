//! Exhaustive minimax search with alpha-beta pruning.
//!
//! The computer always plays O and maximizes; X minimizes. Terminal
//! positions score `10 - depth` when O has won, `depth - 10` when X has
//! won and `0` for a tie, so the engine prefers quick wins and slow
//! losses. Depth counts plies from the start of the sub-search.
//!
//! The tree is small enough (at most 9! move orders) that every call
//! searches to the end of the game.

use crate::action::{Move, SearchError};
use crate::difficulty::Difficulty;
use crate::rules::{Outcome, evaluate_outcome};
use crate::types::{BOARD_SIZE, Board, Player};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Upper bound for beta at the root.
pub const INFINITY: i32 = i32::MAX;

/// Lower bound for alpha at the root.
pub const NEG_INFINITY: i32 = i32::MIN;

/// Depth at which the search stops and scores the position as level.
pub const MAX_DEPTH: usize = BOARD_SIZE;

const WIN_SCORE: i32 = 10;

/// Recursive game-tree search.
///
/// Holds nothing but a node counter, so a fresh searcher per computer
/// turn keeps the engine stateless between moves.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    nodes: u64,
    exhaustive: bool,
}

impl Searcher {
    /// Creates a searcher that prunes with alpha-beta cutoffs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a searcher that visits every node (plain minimax).
    ///
    /// Returns the same scores as [`Searcher::new`], only slower.
    pub fn exhaustive() -> Self {
        Self {
            nodes: 0,
            exhaustive: true,
        }
    }

    /// Number of positions evaluated so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Scores `board` with `maximizing` telling whether O is to move.
    ///
    /// Children are visited in ascending square order. Siblings are
    /// skipped once `beta <= alpha` unless the searcher is exhaustive.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if let Some(score) = terminal_score(board, depth) {
            return score;
        }

        let (player, mut best) = if maximizing {
            (Player::O, NEG_INFINITY)
        } else {
            (Player::X, INFINITY)
        };

        for (_, next) in board.successors(player) {
            let score = self.search(&next, depth + 1, !maximizing, alpha, beta);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if !self.exhaustive && beta <= alpha {
                break;
            }
        }

        best
    }

    /// Scores every square O could take, in ascending square order.
    pub fn score_moves(&mut self, board: &Board) -> Vec<Move> {
        board
            .successors(Player::O)
            .map(|(pos, next)| {
                let score = self.search(&next, 0, false, NEG_INFINITY, INFINITY);
                trace!(pos, score, "Scored candidate move");
                Move::scored(pos, score)
            })
            .collect()
    }
}

/// Score of a finished position, or `None` if play continues.
fn terminal_score(board: &Board, depth: usize) -> Option<i32> {
    let depth = depth as i32;
    match evaluate_outcome(board) {
        Outcome::Won(Player::O) => Some(WIN_SCORE - depth),
        Outcome::Won(Player::X) => Some(depth - WIN_SCORE),
        Outcome::Tie => Some(0),
        Outcome::Undecided if depth >= MAX_DEPTH as i32 => Some(0),
        Outcome::Undecided => None,
    }
}

/// Scores `board` with a fresh pruning searcher.
///
/// See [`Searcher::search`].
pub fn search(board: &Board, depth: usize, maximizing: bool, alpha: i32, beta: i32) -> i32 {
    Searcher::new().search(board, depth, maximizing, alpha, beta)
}

/// Scores every square O could take. See [`Searcher::score_moves`].
#[instrument(skip(board), fields(board = %board))]
pub fn score_moves(board: &Board) -> Vec<Move> {
    Searcher::new().score_moves(board)
}

/// Picks the computer's reply.
///
/// On [`Difficulty::Easy`] and [`Difficulty::Medium`] the engine first
/// rolls `rng` and, with the level's probability, answers with a random
/// square and no score. Otherwise every square is searched and the
/// lowest square with the strictly highest score wins. `Hard` never
/// touches `rng`.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Move, SearchError> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(SearchError::NoMovesAvailable);
    }

    let probability = difficulty.randomize_probability();
    if probability > 0.0 && rng.random_bool(probability) {
        let index = moves[rng.random_range(0..moves.len())];
        debug!(index, %difficulty, "Playing random move");
        return Ok(Move::random(index));
    }

    let mut searcher = Searcher::new();
    let best = searcher
        .score_moves(board)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.score > best.score {
                candidate
            } else {
                best
            }
        })
        .ok_or(SearchError::NoMovesAvailable)?;

    debug!(
        index = best.index,
        score = ?best.score,
        nodes = searcher.nodes(),
        "Search complete"
    );
    Ok(best)
}

/// Picks a uniformly random empty square, without a score.
///
/// # Errors
///
/// Returns [`SearchError::NoMovesAvailable`] if the board is full.
#[instrument(skip(board, rng))]
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Move, SearchError> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(SearchError::NoMovesAvailable);
    }
    Ok(Move::random(moves[rng.random_range(0..moves.len())]))
}
