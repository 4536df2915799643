//! Round resolution and match execution

use serde::{Deserialize, Serialize};

use crate::judge;
use crate::moves::Move;
use crate::random::Picker;
use crate::state::{MatchConfig, MatchState, Verdict};
use crate::validate::{validate, Rejection, Validation};

/// Who took a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl Winner {
    pub fn as_str(self) -> &'static str {
        match self {
            Winner::User => "user",
            Winner::Bot => "bot",
            Winner::Draw => "draw",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub bot_move: Move,
    pub winner: Winner,
}

/// What happened on one turn, as reported back to the player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TurnReport {
    /// Input was rejected and the round was spent anyway
    Wasted { round: u32, reason: Rejection },
    Resolved {
        round: u32,
        user_move: Move,
        bot_move: Move,
        winner: Winner,
        /// Running totals after this round
        user_score: u32,
        bot_score: u32,
    },
}

impl TurnReport {
    pub fn round(&self) -> u32 {
        match self {
            TurnReport::Wasted { round, .. } | TurnReport::Resolved { round, .. } => *round,
        }
    }

    /// Round winner, `None` for a wasted round
    pub fn winner(&self) -> Option<Winner> {
        match self {
            TurnReport::Wasted { .. } => None,
            TurnReport::Resolved { winner, .. } => Some(*winner),
        }
    }
}

/// Result of a complete match
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub turns: Vec<TurnReport>,
    pub user_score: u32,
    pub bot_score: u32,
    pub verdict: Verdict,
}

impl MatchResult {
    /// Collect the turns of a finished match
    pub fn new(turns: Vec<TurnReport>, state: &MatchState) -> Self {
        debug_assert!(state.is_over(), "match result taken before the last round");
        Self {
            turns,
            user_score: state.user_score(),
            bot_score: state.bot_score(),
            // Only reachable mid-match in release builds
            verdict: state.verdict().unwrap_or(Verdict::Draw),
        }
    }
}

/// Moves the opponent may choose from given its bomb budget
fn bot_candidates(state: &MatchState) -> Vec<Move> {
    if state.bot_bomb_used() {
        Move::BASIC.to_vec()
    } else {
        Move::ALL.to_vec()
    }
}

/// Resolve one round against an already validated user move
///
/// Picks the opponent's move, spends bombs, scores the round and advances
/// the round counter. `user_move` is trusted; run it through
/// [`validate`] first.
pub fn resolve<P: Picker + ?Sized>(
    user_move: Move,
    state: &mut MatchState,
    picker: &mut P,
) -> RoundOutcome {
    debug_assert!(
        !(user_move == Move::Bomb && state.user_bomb_used()),
        "second user bomb reached the resolver"
    );

    let candidates = bot_candidates(state);
    let bot_move = picker.pick(&candidates);
    debug_assert!(candidates.contains(&bot_move));

    // Bombs are spent whatever the result
    if user_move == Move::Bomb {
        state.mark_user_bomb();
    }
    if bot_move == Move::Bomb {
        state.mark_bot_bomb();
    }

    let winner = judge(user_move, bot_move);
    match winner {
        Winner::User => state.award_user(),
        Winner::Bot => state.award_bot(),
        Winner::Draw => {}
    }

    log::debug!(
        "round {}: user {} vs bot {} -> {}",
        state.round_number(),
        user_move,
        bot_move,
        winner
    );

    state.advance_round();

    RoundOutcome { bot_move, winner }
}

/// Validate raw input and play it as the current round
///
/// Rejected input still consumes the round.
pub fn play_turn<P: Picker + ?Sized>(
    raw: &str,
    state: &mut MatchState,
    picker: &mut P,
) -> TurnReport {
    debug_assert!(!state.is_over(), "turn played after the match ended");

    let round = state.round_number();
    match validate(raw, state.user_bomb_used()) {
        Validation::Rejected(reason) => {
            log::info!("round {} wasted: {}", round, reason);
            state.advance_round();
            TurnReport::Wasted { round, reason }
        }
        Validation::Valid(user_move) => {
            let outcome = resolve(user_move, state, picker);
            TurnReport::Resolved {
                round,
                user_move,
                bot_move: outcome.bot_move,
                winner: outcome.winner,
                user_score: state.user_score(),
                bot_score: state.bot_score(),
            }
        }
    }
}

/// Run a complete match from a sequence of raw inputs
///
/// Missing inputs count as empty ones and waste their rounds; inputs past
/// the last round are ignored.
pub fn run_match<I, S, P>(inputs: I, config: &MatchConfig, picker: &mut P) -> MatchResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: Picker + ?Sized,
{
    let mut state = MatchState::new(config);
    let mut inputs = inputs.into_iter();
    let mut turns = Vec::with_capacity(config.max_rounds() as usize);

    while !state.is_over() {
        let report = match inputs.next() {
            Some(raw) => play_turn(raw.as_ref(), &mut state, picker),
            None => play_turn("", &mut state, picker),
        };
        turns.push(report);
    }

    MatchResult::new(turns, &state)
}
