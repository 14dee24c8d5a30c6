//! Opponent decision making.
//!
//! Policies are trait-based to allow customization:
//! - `RandomEligible`: shuffled pick among affordable attacks (level 1)
//! - `Greedy`: most expensive affordable attack (level 2 and up)
//! - `LevelPolicy`: switches between the two by level (the default)

pub mod opponent;

pub use opponent::{Greedy, LevelPolicy, OpponentPolicy, RandomEligible};
