//! Match state and configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RefereeError, Result};

/// Match length
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    max_rounds: u32,
}

impl MatchConfig {
    pub fn new(max_rounds: u32) -> Result<Self> {
        if max_rounds == 0 {
            return Err(RefereeError::InvalidRoundCount(max_rounds));
        }
        Ok(Self { max_rounds })
    }

    /// Best of three
    pub fn standard() -> Self {
        Self { max_rounds: 3 }
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Overall result of a finished match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    User,
    Bot,
    Draw,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::User => "user wins",
            Verdict::Bot => "bot wins",
            Verdict::Draw => "draw",
        })
    }
}

/// Everything the referee tracks between rounds
///
/// Owned by the match loop and lent to the resolver one round at a time.
/// Scores and bomb flags only move forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchState {
    round_number: u32,
    max_rounds: u32,
    user_score: u32,
    bot_score: u32,
    user_bomb_used: bool,
    bot_bomb_used: bool,
}

impl MatchState {
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            round_number: 1,
            max_rounds: config.max_rounds,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
        }
    }

    /// The round about to be played (1-indexed)
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    /// Rounds already processed, wasted ones included
    pub fn rounds_played(&self) -> u32 {
        self.round_number - 1
    }

    pub fn is_over(&self) -> bool {
        self.round_number > self.max_rounds
    }

    /// Compare final scores. `None` while rounds remain.
    pub fn verdict(&self) -> Option<Verdict> {
        if !self.is_over() {
            return None;
        }
        Some(match self.user_score.cmp(&self.bot_score) {
            std::cmp::Ordering::Greater => Verdict::User,
            std::cmp::Ordering::Less => Verdict::Bot,
            std::cmp::Ordering::Equal => Verdict::Draw,
        })
    }

    pub(crate) fn mark_user_bomb(&mut self) {
        self.user_bomb_used = true;
    }

    pub(crate) fn mark_bot_bomb(&mut self) {
        self.bot_bomb_used = true;
    }

    pub(crate) fn award_user(&mut self) {
        self.user_score += 1;
    }

    pub(crate) fn award_bot(&mut self) {
        self.bot_score += 1;
    }

    /// Close the current round. Called exactly once per processed turn.
    pub(crate) fn advance_round(&mut self) {
        self.round_number += 1;
        debug_assert!(self.user_score + self.bot_score <= self.rounds_played());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_rejects_zero_rounds() {
        assert_eq!(MatchConfig::new(0), Err(RefereeError::InvalidRoundCount(0)));
        assert_eq!(MatchConfig::new(5).unwrap().max_rounds(), 5);
        assert_eq!(MatchConfig::default().max_rounds(), 3);
    }

    #[test]
    fn test_new_state() {
        let state = MatchState::new(&MatchConfig::standard());
        assert_eq!(state.round_number(), 1);
        assert_eq!(state.max_rounds(), 3);
        assert_eq!(state.user_score(), 0);
        assert_eq!(state.bot_score(), 0);
        assert!(!state.user_bomb_used());
        assert!(!state.bot_bomb_used());
        assert!(!state.is_over());
        assert_eq!(state.verdict(), None);
    }

    #[test]
    fn test_over_after_max_rounds() {
        let mut state = MatchState::new(&MatchConfig::new(2).unwrap());
        state.advance_round();
        assert!(!state.is_over());
        state.advance_round();
        assert!(state.is_over());
        assert_eq!(state.rounds_played(), 2);
        assert_eq!(state.verdict(), Some(Verdict::Draw));
    }

    #[test]
    fn test_verdict_compares_scores() {
        let mut state = MatchState::new(&MatchConfig::new(1).unwrap());
        state.award_bot();
        state.advance_round();
        assert_eq!(state.verdict(), Some(Verdict::Bot));

        let mut state = MatchState::new(&MatchConfig::new(1).unwrap());
        state.award_user();
        state.advance_round();
        assert_eq!(state.verdict(), Some(Verdict::User));
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::User.to_string(), "user wins");
        assert_eq!(Verdict::Bot.to_string(), "bot wins");
        assert_eq!(Verdict::Draw.to_string(), "draw");
    }
}
