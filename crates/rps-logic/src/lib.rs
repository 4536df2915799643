//! Match Logic for Rock-Paper-Scissors-Bomb
//!
//! Referee core for best-of-N matches against a randomized opponent.
//! This crate is compiled to:
//! - Native (for the command-line referee)
//! - WASM (for a browser frontend)

mod error;
mod game;
mod moves;
mod random;
mod state;
mod validate;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{RefereeError, Result};
pub use game::{play_turn, resolve, run_match, MatchResult, RoundOutcome, TurnReport, Winner};
pub use moves::Move;
pub use random::{Picker, ScriptedPicker, SeededRng};
pub use state::{MatchConfig, MatchState, Verdict};
pub use validate::{normalize, validate, Rejection, Validation};

/// Rule summary shown before a match; `{rounds}` is the match length
pub const RULES: &str = "Rock-Paper-Scissors-Plus rules:
- Best of {rounds} rounds
- Moves: rock, paper, scissors, bomb
- Bomb beats everything but can be used only once
- Invalid input wastes the round";

/// [`RULES`] filled in with the configured match length
pub fn rules_text(config: &MatchConfig) -> String {
    RULES.replace("{rounds}", &config.max_rounds().to_string())
}

/// Round outcome from the user's side
///
/// Equal moves draw, a lone bomb wins, otherwise
/// rock > scissors > paper > rock.
pub fn judge(user: Move, bot: Move) -> Winner {
    match (user, bot) {
        (u, b) if u == b => Winner::Draw,
        (Move::Bomb, _) => Winner::User,
        (_, Move::Bomb) => Winner::Bot,
        (u, b) if u.beats_basic(b) => Winner::User,
        _ => Winner::Bot,
    }
}
