//! Player input validation
//!
//! Raw input is trimmed, lowercased and passed through a small alias table
//! before it is checked against the canonical moves. Rejections are returned
//! as data so the caller can report them and burn the round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Common misspellings and their canonical move names
const ALIASES: &[(&str, &str)] = &[
    ("rocks", "rock"),
    ("papers", "paper"),
    ("scissor", "scissors"),
    ("sissors", "scissors"),
    ("scisors", "scissors"),
    ("bombs", "bomb"),
];

/// Why an input did not count as a move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    NoMove,
    InvalidMove,
    BombAlreadyUsed,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::NoMove => "no move provided",
            Rejection::InvalidMove => "invalid move",
            Rejection::BombAlreadyUsed => "bomb already used",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one raw input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Validation {
    Valid(Move),
    Rejected(Rejection),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }
}

/// Trim, lowercase and resolve aliases. Unknown words pass through unchanged.
pub fn normalize(raw: &str) -> String {
    let folded = raw.trim().to_lowercase();
    match ALIASES.iter().find(|(alias, _)| *alias == folded) {
        Some((_, canonical)) => (*canonical).to_string(),
        None => folded,
    }
}

/// Validate a raw move against the rules and the player's bomb budget
///
/// Checks, in order:
/// - input is not empty
/// - input names a move once normalized
/// - a bomb is still available if one was asked for
pub fn validate(raw: &str, bomb_already_used: bool) -> Validation {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Validation::Rejected(Rejection::NoMove);
    }

    let Some(mv) = Move::from_canonical(&normalized) else {
        return Validation::Rejected(Rejection::InvalidMove);
    };

    if mv == Move::Bomb && bomb_already_used {
        return Validation::Rejected(Rejection::BombAlreadyUsed);
    }

    Validation::Valid(mv)
}
