//! Difficulty levels for the computer opponent.

use serde::{Deserialize, Serialize};

/// How often the computer plays a random square instead of searching.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random move 30% of the time.
    Easy,
    /// Random move 15% of the time.
    Medium,
    /// Always searches. Cannot be beaten.
    #[default]
    Hard,
}

impl Difficulty {
    /// Probability that a computer turn skips the search.
    pub fn randomize_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.3,
            Difficulty::Medium => 0.15,
            Difficulty::Hard => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_display_lowercase() {
        assert_eq!(Difficulty::Medium.to_string(), "medium");
    }

    #[test]
    fn test_default_is_hard() {
        assert_eq!(Difficulty::default(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.randomize_probability(), 0.0);
    }
}
