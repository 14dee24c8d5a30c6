//! Fighter resource model.
//!
//! A `CombatEntity` is one fighter's mutable state: health and stamina, each
//! bounded by a maximum fixed at creation.
//!
//! ## Invariants
//!
//! - `0 <= health <= max_health`
//! - `0 <= stamina <= max_stamina`
//!
//! Every mutator clamps, so no sequence of calls can break these bounds.
//!
//! ## Usage
//!
//! ```
//! use furry_fists::core::{CombatEntity, Side};
//!
//! let mut wolf = CombatEntity::new("wolf", Side::Player, 100, 100);
//!
//! assert!(wolf.spend_stamina(25));
//! assert!(!wolf.spend_stamina(80)); // only 75 left, nothing spent
//! assert_eq!(wolf.stamina(), 75);
//!
//! wolf.apply_damage(120);
//! assert_eq!(wolf.health(), 0);
//! assert!(!wolf.is_alive());
//! ```

use serde::{Deserialize, Serialize};

use super::side::Side;

/// One fighter's health and stamina.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEntity {
    name: String,
    side: Side,
    max_health: u32,
    health: u32,
    max_stamina: u32,
    stamina: u32,
}

impl CombatEntity {
    /// Create a fighter at full health and stamina.
    pub fn new(name: impl Into<String>, side: Side, max_health: u32, max_stamina: u32) -> Self {
        Self {
            name: name.into(),
            side,
            max_health,
            health: max_health,
            max_stamina,
            stamina: max_stamina,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub const fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub const fn stamina(&self) -> u32 {
        self.stamina
    }

    #[must_use]
    pub const fn max_stamina(&self) -> u32 {
        self.max_stamina
    }

    /// Subtract `amount` from health, stopping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        self.check_bounds();
    }

    /// Spend `amount` stamina if the fighter has that much.
    ///
    /// Returns `false` and leaves stamina untouched when it would go
    /// negative. The caller falls back to a free action in that case.
    #[must_use = "a failed spend means the action must be downgraded"]
    pub fn spend_stamina(&mut self, amount: u32) -> bool {
        if self.stamina < amount {
            return false;
        }
        self.stamina -= amount;
        true
    }

    /// Add `amount` stamina, capped at the maximum.
    ///
    /// Returns how much was actually gained.
    pub fn restore_stamina(&mut self, amount: u32) -> u32 {
        let before = self.stamina;
        self.stamina = self.stamina.saturating_add(amount).min(self.max_stamina);
        self.check_bounds();
        self.stamina - before
    }

    /// A fighter is alive while it has any health left.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Restore health and stamina to their maxima.
    pub fn reset_to_full(&mut self) {
        self.health = self.max_health;
        self.stamina = self.max_stamina;
    }

    /// Capture the current resource values.
    #[must_use]
    pub fn snapshot(&self) -> EntitySnapshot {
        EntitySnapshot {
            name: self.name.clone(),
            side: self.side,
            health: self.health,
            max_health: self.max_health,
            stamina: self.stamina,
            max_stamina: self.max_stamina,
        }
    }

    fn check_bounds(&self) {
        debug_assert!(
            self.health <= self.max_health,
            "{} health {} exceeds max {}",
            self.name,
            self.health,
            self.max_health
        );
        debug_assert!(
            self.stamina <= self.max_stamina,
            "{} stamina {} exceeds max {}",
            self.name,
            self.stamina,
            self.max_stamina
        );
    }
}

/// Point-in-time copy of a fighter's resources, for presentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub name: String,
    pub side: Side,
    pub health: u32,
    pub max_health: u32,
    pub stamina: u32,
    pub max_stamina: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter() -> CombatEntity {
        CombatEntity::new("cat", Side::Player, 100, 100)
    }

    #[test]
    fn test_new_starts_full() {
        let cat = fighter();
        assert_eq!(cat.name(), "cat");
        assert_eq!(cat.side(), Side::Player);
        assert_eq!(cat.health(), 100);
        assert_eq!(cat.stamina(), 100);
        assert!(cat.is_alive());
    }

    #[test]
    fn test_apply_damage_clamps_at_zero() {
        let mut cat = fighter();
        cat.apply_damage(30);
        assert_eq!(cat.health(), 70);

        cat.apply_damage(500);
        assert_eq!(cat.health(), 0);
        assert!(!cat.is_alive());
    }

    #[test]
    fn test_apply_zero_damage() {
        let mut cat = fighter();
        cat.apply_damage(0);
        assert_eq!(cat.health(), 100);
    }

    #[test]
    fn test_spend_stamina_success() {
        let mut cat = fighter();
        assert!(cat.spend_stamina(50));
        assert_eq!(cat.stamina(), 50);
        assert!(cat.spend_stamina(50));
        assert_eq!(cat.stamina(), 0);
    }

    #[test]
    fn test_spend_stamina_insufficient_leaves_state() {
        let mut cat = fighter();
        assert!(cat.spend_stamina(60));
        assert!(!cat.spend_stamina(50));
        assert_eq!(cat.stamina(), 40);
    }

    #[test]
    fn test_restore_stamina_clamps_at_max() {
        let mut cat = fighter();
        assert!(cat.spend_stamina(10));

        let gained = cat.restore_stamina(20);
        assert_eq!(gained, 10);
        assert_eq!(cat.stamina(), 100);
    }

    #[test]
    fn test_reset_to_full() {
        let mut cat = fighter();
        cat.apply_damage(99);
        assert!(cat.spend_stamina(75));

        cat.reset_to_full();
        assert_eq!(cat.health(), 100);
        assert_eq!(cat.stamina(), 100);
    }

    #[test]
    fn test_snapshot_copies_values() {
        let mut cat = fighter();
        cat.apply_damage(15);

        let snap = cat.snapshot();
        assert_eq!(snap.name, "cat");
        assert_eq!(snap.health, 85);
        assert_eq!(snap.max_health, 100);
        assert_eq!(snap.stamina, 100);
    }
}
