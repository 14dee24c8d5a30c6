//! Turn engine: resolves one actor's attack against a target.
//!
//! ## Resolution order
//!
//! 1. Pay the attack's stamina cost, or fall back to Base if unaffordable
//! 2. Roll a die for special attacks and look up damage
//! 3. Refund half the cost on a roll of 4 or more
//! 4. For positive damage, a percentile draw may nullify the hit
//! 5. Apply damage to the target
//! 6. Grant the attacker bonus stamina if the target is below the threshold
//!
//! Every draw goes through the caller's `RandomSource`, in the order above,
//! so a fixed seed reproduces a turn exactly.

use serde::{Deserialize, Serialize};

use crate::core::action::{Attack, BASE_DAMAGE};
use crate::core::config::CombatRules;
use crate::core::entity::CombatEntity;
use crate::core::rng::RandomSource;
use crate::core::side::Side;

/// Cosmetic classification of an attack that would have dealt damage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Narrative {
    /// The attack whiffed and dealt nothing.
    NoDamage,
    /// The attack landed.
    SuccessfulHit,
}

/// Everything that happened during one resolved half-turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Side that attacked.
    pub actor: Side,

    /// Attack that was asked for.
    pub requested: Attack,

    /// Attack that actually happened (Base after a substitution).
    pub performed: Attack,

    /// The requested attack was unaffordable and became Base.
    pub substituted: bool,

    /// Die roll, for special attacks only.
    pub roll: Option<u8>,

    /// Damage applied to the target after the no-damage check.
    pub damage: u32,

    /// `None` when the attack had no damage to begin with.
    pub narrative: Option<Narrative>,

    /// Stamina refunded to the attacker for a high roll.
    pub refund: Option<u32>,

    /// Stamina granted for leaving the target below the threshold.
    pub bonus: Option<u32>,
}

impl TurnReport {
    /// Stamina the attacker paid before any refund.
    #[must_use]
    pub fn stamina_spent(&self) -> u32 {
        self.performed.cost()
    }
}

/// Stateless resolver for single attacks.
#[derive(Clone, Debug, Default)]
pub struct TurnEngine {
    rules: CombatRules,
}

impl TurnEngine {
    pub fn new(rules: CombatRules) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &CombatRules {
        &self.rules
    }

    /// Resolve `requested` from `attacker` against `target`.
    ///
    /// Mutates both fighters' resources and reports what happened. Never
    /// fails: an unaffordable attack downgrades to Base and sets
    /// `substituted`.
    pub fn resolve(
        &self,
        attacker: &mut CombatEntity,
        target: &mut CombatEntity,
        requested: Attack,
        rng: &mut dyn RandomSource,
    ) -> TurnReport {
        debug_assert_ne!(attacker.side(), target.side(), "a fighter can't attack itself");

        let (performed, substituted) = if attacker.spend_stamina(requested.cost()) {
            (requested, false)
        } else {
            (Attack::Base, true)
        };

        let roll = performed.is_special().then(|| rng.roll_die());
        let mut damage = roll.map_or(BASE_DAMAGE, |r| performed.damage(r));

        let refund = match roll {
            Some(r) if performed.cost() > 0 && r >= self.rules.refund_min_roll => {
                Some(attacker.restore_stamina(performed.cost() / 2))
            }
            _ => None,
        };

        let narrative = (damage > 0).then(|| {
            if rng.roll_percent() < self.rules.no_damage_chance {
                damage = 0;
                Narrative::NoDamage
            } else {
                Narrative::SuccessfulHit
            }
        });

        target.apply_damage(damage);

        let bonus = (target.health() < self.rules.low_health_threshold)
            .then(|| attacker.restore_stamina(self.rules.low_health_bonus));

        tracing::debug!(
            actor = %attacker.name(),
            target = %target.name(),
            ?requested,
            ?performed,
            ?roll,
            damage,
            ?refund,
            ?bonus,
            "turn resolved"
        );

        TurnReport {
            actor: attacker.side(),
            requested,
            performed,
            substituted,
            roll,
            damage,
            narrative,
            refund,
            bonus,
        }
    }
}
