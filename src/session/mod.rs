//! Match orchestration.
//!
//! - `Match`: owns both fighters, runs half-turns in order, detects the end
//! - `PlayerInput`: where the player's commands come from
//! - `MatchOutcome` / `PostMatchChoice`: what happened and what comes next

pub mod input;
pub mod match_loop;
pub mod outcome;

pub use input::PlayerInput;
pub use match_loop::{Match, TurnRecord};
pub use outcome::{MatchOutcome, MatchStatus, PostMatchChoice};
