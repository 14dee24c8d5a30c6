//! # furry-fists
//!
//! A turn-based, one-on-one brawler: the player's fighter against a computer
//! opponent, trading attacks until one of them drops.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: the library resolves turns and reports events.
//!    Console text, menus, and audio live behind `EventSink` and
//!    `PlayerInput`.
//!
//! 2. **One random source**: every die roll, no-damage check and AI shuffle
//!    draws from the `RandomSource` the match owns. A seeded `GameRng`
//!    replays a match exactly; `ScriptedRng` pins individual draws in tests.
//!
//! 3. **Symmetric rules**: player and opponent are the same `CombatEntity`
//!    tagged with a `Side`, and use the same attack catalog.
//!
//! ## Modules
//!
//! - `core`: sides, fighters, attacks, RNG, configuration
//! - `rules`: `TurnEngine`, resolution of one half-turn
//! - `policy`: opponent attack selection
//! - `events`: match events, sinks, audio cues
//! - `session`: the match loop and post-match choices
//! - `error`: configuration and match lifecycle errors

pub mod core;
pub mod rules;
pub mod policy;
pub mod events;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    CombatEntity, EntitySnapshot,
    Attack, PlayerCommand,
    GameRng, RandomSource, ScriptedRng,
    CombatConfig, CombatRules, Roster,
};

pub use crate::rules::{Narrative, TurnEngine, TurnReport};

pub use crate::policy::{Greedy, LevelPolicy, OpponentPolicy, RandomEligible};

pub use crate::events::{
    AudioCommand, AudioCue, Volume,
    EventSink, RecordingSink,
    MatchEvent, MatchSnapshot,
};

pub use crate::session::{
    Match, MatchOutcome, MatchStatus, PlayerInput, PostMatchChoice, TurnRecord,
};

pub use crate::error::{ConfigError, MatchError};
