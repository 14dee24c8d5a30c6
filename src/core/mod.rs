//! Core engine types: sides, fighters, attacks, RNG, configuration.
//!
//! These are the building blocks the turn engine and match loop operate on.
//! Nothing here performs I/O.

pub mod side;
pub mod entity;
pub mod action;
pub mod rng;
pub mod config;

pub use side::{Side, SideMap};
pub use entity::{CombatEntity, EntitySnapshot};
pub use action::{Attack, PlayerCommand, BASE_DAMAGE, SECONDARY_DAMAGE, TERTIARY_DAMAGE};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{CombatConfig, CombatRules, Roster};
