//! Who opens each round.

use super::types::PlayerId;
use serde::{Deserialize, Serialize};

/// Rule for choosing the first mover of a round.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpeningPolicy {
    /// Player One opens every round.
    #[default]
    AlwaysPlayerOne,
    /// Player One opens odd rounds, Player Two opens even rounds.
    AlternateByRound,
}

impl OpeningPolicy {
    /// First mover for the 1-indexed `round`.
    pub fn opener(self, round: u32) -> PlayerId {
        match self {
            OpeningPolicy::AlwaysPlayerOne => PlayerId::PlayerOne,
            OpeningPolicy::AlternateByRound if round % 2 == 0 => PlayerId::PlayerTwo,
            OpeningPolicy::AlternateByRound => PlayerId::PlayerOne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_openers() {
        for round in 1..=3 {
            assert_eq!(OpeningPolicy::AlwaysPlayerOne.opener(round), PlayerId::PlayerOne);
        }
        assert_eq!(OpeningPolicy::AlternateByRound.opener(1), PlayerId::PlayerOne);
        assert_eq!(OpeningPolicy::AlternateByRound.opener(2), PlayerId::PlayerTwo);
        assert_eq!(OpeningPolicy::AlternateByRound.opener(3), PlayerId::PlayerOne);
    }

    #[test]
    fn test_parse_kebab_case() {
        assert_eq!(
            OpeningPolicy::from_str("alternate-by-round"),
            Ok(OpeningPolicy::AlternateByRound)
        );
        assert_eq!(OpeningPolicy::AlwaysPlayerOne.to_string(), "always-player-one");
        assert!(OpeningPolicy::from_str("coin-flip").is_err());
    }
}
