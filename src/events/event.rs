//! Match event types.
//!
//! Events are what the presentation layer sees of a match. The match loop
//! emits them in order as each half-turn resolves; a sink decides how to
//! render them (console text, sound, a log, or nothing).

use serde::{Deserialize, Serialize};

use crate::core::{Attack, EntitySnapshot, Side, SideMap};
use crate::rules::Narrative;
use crate::session::MatchOutcome;

use super::audio::AudioCue;

/// Both fighters' resources at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub level: u32,
    pub fighters: SideMap<EntitySnapshot>,
}

impl MatchSnapshot {
    #[must_use]
    pub fn player(&self) -> &EntitySnapshot {
        &self.fighters[Side::Player]
    }

    #[must_use]
    pub fn opponent(&self) -> &EntitySnapshot {
        &self.fighters[Side::Opponent]
    }
}

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A match (or replay, or new level) began.
    MatchStarted {
        level: u32,
        player: String,
        opponent: String,
    },

    /// A side is about to act.
    TurnStarted { side: Side, name: String },

    /// The requested attack was unaffordable and became Base.
    Substituted { side: Side, requested: Attack },

    /// A side used an attack (after any substitution).
    AttackUsed { side: Side, attack: Attack },

    /// A special attack rolled the die.
    Rolled { side: Side, attack: Attack, roll: u8 },

    /// The attack either whiffed or landed.
    Narrative {
        category: Narrative,
        attacker: String,
        target: String,
        damage: u32,
    },

    /// Stamina refunded for a high roll.
    StaminaRefund { side: Side, amount: u32 },

    /// Stamina granted for pushing the target below the threshold.
    StaminaBonus { side: Side, amount: u32 },

    /// Resources of both fighters after a half-turn.
    Snapshot(MatchSnapshot),

    /// The match ended. `winner` is `None` when the player quit.
    MatchOver {
        outcome: MatchOutcome,
        winner: Option<String>,
    },

    /// A sound the presentation layer should play.
    Audio(AudioCue),
}

impl MatchEvent {
    /// Side this event is about, if it belongs to one.
    #[must_use]
    pub fn side(&self) -> Option<Side> {
        match self {
            MatchEvent::TurnStarted { side, .. }
            | MatchEvent::Substituted { side, .. }
            | MatchEvent::AttackUsed { side, .. }
            | MatchEvent::Rolled { side, .. }
            | MatchEvent::StaminaRefund { side, .. }
            | MatchEvent::StaminaBonus { side, .. } => Some(*side),
            _ => None,
        }
    }
}
