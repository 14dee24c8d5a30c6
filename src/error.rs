//! Error types for match setup and orchestration.
//!
//! Turn resolution itself cannot fail: an unaffordable attack is a defined
//! fallback, not an error. These errors cover configuration problems and
//! misuse of the match lifecycle by the caller.

use thiserror::Error;

use crate::core::Side;
use crate::session::MatchOutcome;

/// A configuration that can't produce a playable match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("starting health must be positive")]
    ZeroStartingHealth,

    #[error("starting stamina must be positive")]
    ZeroStartingStamina,

    #[error("no-damage chance must be 0-100 percent (got {0})")]
    NoDamageChance(u32),

    #[error("refund roll must be 1-6 (got {0})")]
    RefundRoll(u8),

    #[error("roster needs at least two distinct fighters (got {0})")]
    RosterTooSmall(usize),
}

/// Errors surfaced by the match loop.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("player and opponent must be different fighters (both are '{0}')")]
    DuplicateNames(String),

    #[error("match already finished: {0:?}")]
    MatchOver(MatchOutcome),

    #[error("it is not the {0} side's turn")]
    OutOfTurn(Side),

    #[error("quitting mid-match is disabled")]
    QuitDisabled,

    #[error("match is still in progress")]
    NotFinished,

    #[error("level can only advance after a victory (last outcome: {0:?})")]
    NotAVictory(MatchOutcome),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
