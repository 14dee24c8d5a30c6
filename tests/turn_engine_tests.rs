//! Turn resolution integration tests.
//!
//! These pin the combat numbers with scripted draws: costs, damage
//! tables, refunds, the no-damage check and the low-health bonus.

use furry_fists::core::{
    Attack, CombatEntity, CombatRules, GameRng, RandomSource, ScriptedRng, Side,
    SECONDARY_DAMAGE, TERTIARY_DAMAGE,
};
use furry_fists::rules::{Narrative, TurnEngine};

/// Percentile draw that always lands (default no-damage chance is 10).
const HIT: u32 = 50;

fn pair() -> (CombatEntity, CombatEntity) {
    (
        CombatEntity::new("panda", Side::Player, 100, 100),
        CombatEntity::new("goat", Side::Opponent, 100, 100),
    )
}

// =============================================================================
// Base Attack Tests
// =============================================================================

/// Four Base hits take a fresh fighter from 100 to 80 without costing stamina.
#[test]
fn test_four_base_hits() {
    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();
    let mut rng = ScriptedRng::new([HIT; 4]);

    for _ in 0..4 {
        let report = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut rng);
        assert_eq!(report.damage, 5);
    }

    assert_eq!(goat.health(), 80);
    assert_eq!(panda.stamina(), 100);
    assert!(rng.is_exhausted());
}

/// Base never rolls the die: the only draw is the no-damage check.
#[test]
fn test_base_draws_only_percentile() {
    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();
    let mut rng = ScriptedRng::new([HIT, 99]);

    let report = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut rng);

    assert_eq!(report.roll, None);
    assert_eq!(rng.remaining(), 1);
}

// =============================================================================
// Special Attack Tests
// =============================================================================

/// Secondary at exactly 25 SP, rolling 4: 18 damage and 12 SP back.
#[test]
fn test_secondary_at_exact_cost_with_refund() {
    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();
    assert!(panda.spend_stamina(75));
    let mut rng = ScriptedRng::new([4, HIT]);

    let report = engine.resolve(&mut panda, &mut goat, Attack::Secondary, &mut rng);

    assert!(!report.substituted);
    assert_eq!(report.damage, 18);
    assert_eq!(report.refund, Some(12));
    assert_eq!(panda.stamina(), 12);
    assert_eq!(goat.health(), 82);
}

/// Every die face maps to its table entry for both special attacks.
#[test]
fn test_damage_tables() {
    let engine = TurnEngine::new(CombatRules {
        no_damage_chance: 0,
        ..CombatRules::default()
    });

    for (attack, table) in [
        (Attack::Secondary, SECONDARY_DAMAGE),
        (Attack::Tertiary, TERTIARY_DAMAGE),
    ] {
        for roll in 1..=6u8 {
            let (mut panda, mut goat) = pair();
            let mut rng = ScriptedRng::new([u32::from(roll), HIT]);

            let report = engine.resolve(&mut panda, &mut goat, attack, &mut rng);

            assert_eq!(report.damage, table[usize::from(roll) - 1]);
            assert_eq!(goat.health(), 100 - report.damage);
        }
    }
}

/// Refund is half the cost, and only on 4, 5 or 6.
#[test]
fn test_refund_threshold() {
    let engine = TurnEngine::default();

    for roll in 1..=6u32 {
        let (mut panda, mut goat) = pair();
        let mut rng = ScriptedRng::new([roll, HIT]);

        let report = engine.resolve(&mut panda, &mut goat, Attack::Tertiary, &mut rng);

        if roll >= 4 {
            assert_eq!(report.refund, Some(25));
            assert_eq!(panda.stamina(), 75);
        } else {
            assert_eq!(report.refund, None);
            assert_eq!(panda.stamina(), 50);
        }
    }
}

/// An unaffordable special attack falls back to Base and rolls nothing.
#[test]
fn test_substitution_skips_the_die() {
    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();
    assert!(panda.spend_stamina(51));
    let mut rng = ScriptedRng::new([HIT]);

    let report = engine.resolve(&mut panda, &mut goat, Attack::Tertiary, &mut rng);

    assert!(report.substituted);
    assert_eq!(report.performed, Attack::Base);
    assert_eq!(report.roll, None);
    assert_eq!(panda.stamina(), 49);
    assert_eq!(goat.health(), 95);
}

// =============================================================================
// No-Damage And Bonus Tests
// =============================================================================

/// A 100% no-damage chance makes every attack whiff.
#[test]
fn test_certain_whiff() {
    let engine = TurnEngine::new(CombatRules {
        no_damage_chance: 100,
        ..CombatRules::default()
    });
    let (mut panda, mut goat) = pair();
    let mut rng = ScriptedRng::new([6, 99, 99]);

    let special = engine.resolve(&mut panda, &mut goat, Attack::Tertiary, &mut rng);
    let base = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut rng);

    assert_eq!(special.narrative, Some(Narrative::NoDamage));
    assert_eq!(base.narrative, Some(Narrative::NoDamage));
    assert_eq!(goat.health(), 100);
}

/// The percentile draw lands exactly on the boundary: 9 whiffs, 10 hits.
#[test]
fn test_no_damage_boundary() {
    let engine = TurnEngine::default();

    let (mut panda, mut goat) = pair();
    let whiff = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut ScriptedRng::new([9]));
    let hit = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut ScriptedRng::new([10]));

    assert_eq!(whiff.damage, 0);
    assert_eq!(hit.damage, 5);
}

/// The bonus is paid every turn the target stays below the threshold.
#[test]
fn test_bonus_repeats_while_target_is_low() {
    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();
    goat.apply_damage(60);
    assert!(panda.spend_stamina(100));
    let mut rng = ScriptedRng::new([HIT, HIT]);

    let first = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut rng);
    let second = engine.resolve(&mut panda, &mut goat, Attack::Base, &mut rng);

    assert_eq!(first.bonus, Some(20));
    assert_eq!(second.bonus, Some(20));
    assert_eq!(panda.stamina(), 40);
    assert_eq!(goat.health(), 30);
}

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same seed resolves the same sequence of turns.
#[test]
fn test_seeded_resolution_is_reproducible() {
    let engine = TurnEngine::default();

    let run = |seed: u64| {
        let mut rng = GameRng::new(seed);
        let (mut panda, mut goat) = pair();
        (0..10)
            .map(|i| {
                let attack = Attack::ALL[i % 3];
                engine.resolve(&mut panda, &mut goat, attack, &mut rng)
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(99), run(99));
}

/// A custom `RandomSource` plugs straight into the engine.
#[test]
fn test_custom_random_source() {
    struct AlwaysMax;

    impl RandomSource for AlwaysMax {
        fn next_in(&mut self, range: std::ops::Range<u32>) -> u32 {
            range.end - 1
        }
    }

    let engine = TurnEngine::default();
    let (mut panda, mut goat) = pair();

    let report = engine.resolve(&mut panda, &mut goat, Attack::Tertiary, &mut AlwaysMax);

    assert_eq!(report.roll, Some(6));
    assert_eq!(report.damage, 50);
}
