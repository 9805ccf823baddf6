//! Running tally of finished games against the computer.

use crate::rules::Outcome;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win/loss/tie counters from the human's point of view.
///
/// The tally lives in memory; storing it between runs is up to the
/// front-end, which is why it serializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct GameStats {
    /// Games won by X.
    player_wins: u32,
    /// Games won by O.
    ai_wins: u32,
    /// Tied games.
    ties: u32,
    /// Finished games.
    games_played: u32,
}

impl GameStats {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. Undecided outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.player_wins += 1,
            Outcome::Won(Player::O) => self.ai_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Undecided => {
                debug!("Ignoring unfinished game");
                return;
            }
        }
        self.games_played += 1;
    }

    /// Percentage of games won by X, rounded to the nearest whole number.
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            0
        } else {
            (f64::from(self.player_wins) / f64::from(self.games_played) * 100.0).round() as u32
        }
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Won(Player::O));
        stats.record(Outcome::Won(Player::O));
        stats.record(Outcome::Tie);

        assert_eq!(*stats.player_wins(), 1);
        assert_eq!(*stats.ai_wins(), 2);
        assert_eq!(*stats.ties(), 1);
        assert_eq!(*stats.games_played(), 4);
    }

    #[test]
    fn test_undecided_not_counted() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Undecided);
        assert_eq!(stats, GameStats::default());
    }

    #[test]
    fn test_win_rate_rounds() {
        let mut stats = GameStats::new();
        assert_eq!(stats.win_rate(), 0);

        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Tie);
        stats.record(Outcome::Tie);
        // 1/3 = 33.3%
        assert_eq!(stats.win_rate(), 33);

        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Won(Player::X));
        // 3/5 = 60%
        assert_eq!(stats.win_rate(), 60);

        let mut stats = GameStats::new();
        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Tie);
        // 2/3 = 66.7%
        assert_eq!(stats.win_rate(), 67);
    }

    #[test]
    fn test_reset() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Tie);
        stats.reset();
        assert_eq!(stats, GameStats::new());
    }

    #[test]
    fn test_serializes_with_field_names() {
        let mut stats = GameStats::new();
        stats.record(Outcome::Won(Player::O));
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["ai_wins"], 1);
        assert_eq!(json["games_played"], 1);
    }
}
