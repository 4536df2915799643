//! Errors raised while setting up a match
//!
//! Rejected player input is not an error; see [`crate::Validation`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefereeError {
    #[error("match must have at least one round, got {0}")]
    InvalidRoundCount(u32),

    #[error("unknown move: {0:?}")]
    UnknownMove(String),
}

pub type Result<T> = std::result::Result<T, RefereeError>;
