//! Turn resolution rules.
//!
//! `TurnEngine` applies one attack from one fighter to the other and
//! reports the outcome as a `TurnReport`. Win checks and turn order belong
//! to the match loop in `session`.

pub mod engine;

pub use engine::{Narrative, TurnEngine, TurnReport};
