//! Move definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RefereeError;
use crate::validate::normalize;

/// A canonical move in Rock-Paper-Scissors-Bomb
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats every other move. Each side may play it once per match.
    Bomb,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The moves that are always available to both sides
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Look up a canonical move name. No trimming, casing or aliases.
    pub fn from_canonical(name: &str) -> Option<Move> {
        Move::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Whether `self` wins the classic rock > scissors > paper > rock cycle
    /// against `other`. Always false when either side is a bomb.
    pub fn beats_basic(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = RefereeError;

    /// Parses with the same normalization the validator applies.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Move::from_canonical(&normalize(s))
            .ok_or_else(|| RefereeError::UnknownMove(s.to_string()))
    }
}
