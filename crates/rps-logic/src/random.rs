//! Opponent move selection
//!
//! The opponent's choice is the only nondeterministic input to a match.
//! It goes through [`Picker`] so resolution can run against a seeded
//! generator in play and a fixed script in tests.

use std::collections::VecDeque;

use crate::moves::Move;

/// Chooses the opponent's move from the moves currently open to it
pub trait Picker {
    /// Pick one element of `candidates`, which is never empty.
    fn pick(&mut self, candidates: &[Move]) -> Move;
}

/// Seeded pseudo-random number generator
///
/// Deterministic: same seed = same sequence of picks
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        // xorshift has a fixed point at zero
        let state = (seed ^ 0x9e3779b97f4a7c15).max(1);

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl Picker for SeededRng {
    fn pick(&mut self, candidates: &[Move]) -> Move {
        let index = self.next_range(candidates.len() as u32) as usize;
        candidates[index]
    }
}

/// Replays a fixed sequence of opponent moves
///
/// A scripted move that is not currently allowed (a second bomb) or an
/// exhausted script falls back to the first candidate.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPicker {
    script: VecDeque<Move>,
}

impl ScriptedPicker {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, candidates: &[Move]) -> Move {
        match self.script.pop_front() {
            Some(mv) if candidates.contains(&mv) => mv,
            Some(mv) => {
                log::warn!("scripted opponent move {} not allowed, playing {}", mv, candidates[0]);
                candidates[0]
            }
            None => {
                log::warn!("opponent script exhausted, playing {}", candidates[0]);
                candidates[0]
            }
        }
    }
}
