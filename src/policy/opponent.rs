//! Opponent attack selection.

use crate::core::{Attack, RandomSource};

/// Chooses the opponent's attack for a turn.
///
/// Implementations see only the level and the opponent's own stamina.
pub trait OpponentPolicy {
    /// Pick an attack. Must return an attack affordable with `stamina`.
    fn choose_attack(&self, level: u32, stamina: u32, rng: &mut dyn RandomSource) -> Attack;
}

/// Random pick filtered by affordability.
///
/// Shuffles the catalog and takes the first attack the opponent can pay
/// for. Base is always affordable, so the search always succeeds; cheaper
/// attacks come up more often than a flat one-in-three.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomEligible;

impl OpponentPolicy for RandomEligible {
    fn choose_attack(&self, _level: u32, stamina: u32, rng: &mut dyn RandomSource) -> Attack {
        let mut order = Attack::ALL;
        rng.shuffle_attacks(&mut order);

        order
            .into_iter()
            .find(|attack| attack.affordable(stamina))
            .unwrap_or(Attack::Base)
    }
}

/// Most expensive affordable attack. Never draws from the RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greedy;

impl OpponentPolicy for Greedy {
    fn choose_attack(&self, _level: u32, stamina: u32, _rng: &mut dyn RandomSource) -> Attack {
        if Attack::Tertiary.affordable(stamina) {
            Attack::Tertiary
        } else if Attack::Secondary.affordable(stamina) {
            Attack::Secondary
        } else {
            Attack::Base
        }
    }
}

/// `RandomEligible` on level 1, `Greedy` from level 2 on.
#[derive(Clone, Copy, Debug, Default)]
pub struct LevelPolicy;

impl OpponentPolicy for LevelPolicy {
    fn choose_attack(&self, level: u32, stamina: u32, rng: &mut dyn RandomSource) -> Attack {
        let attack = if level <= 1 {
            RandomEligible.choose_attack(level, stamina, rng)
        } else {
            Greedy.choose_attack(level, stamina, rng)
        };
        tracing::debug!(level, stamina, ?attack, "opponent chose attack");
        attack
    }
}
