//! Attack catalog and player commands.
//!
//! Three attacks are available to both sides under the same rules:
//!
//! | Attack | Stamina | Damage |
//! |---|---|---|
//! | Base | 0 | 5 |
//! | Secondary | 25 | by roll: 5, 10, 15, 18, 23, 25 |
//! | Tertiary | 50 | by roll: 5, 10, 25, 35, 45, 50 |
//!
//! Special attacks look their damage up by a six-sided roll.

use serde::{Deserialize, Serialize};

/// Damage dealt by the free attack.
pub const BASE_DAMAGE: u32 = 5;

/// Secondary attack damage, indexed by `roll - 1`.
pub const SECONDARY_DAMAGE: [u32; 6] = [5, 10, 15, 18, 23, 25];

/// Tertiary attack damage, indexed by `roll - 1`.
pub const TERTIARY_DAMAGE: [u32; 6] = [5, 10, 25, 35, 45, 50];

/// One of the three attacks in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attack {
    /// Free, fixed damage.
    Base,
    /// 25 stamina, rolled damage.
    Secondary,
    /// 50 stamina, rolled damage with a wider spread.
    Tertiary,
}

impl Attack {
    /// All attacks in menu order.
    pub const ALL: [Attack; 3] = [Attack::Base, Attack::Secondary, Attack::Tertiary];

    /// Stamina required to use this attack.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            Attack::Base => 0,
            Attack::Secondary => 25,
            Attack::Tertiary => 50,
        }
    }

    /// Whether damage depends on a die roll.
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Attack::Base)
    }

    /// Whether a fighter with `stamina` can pay for this attack.
    #[must_use]
    pub const fn affordable(self, stamina: u32) -> bool {
        stamina >= self.cost()
    }

    /// Damage for a given roll.
    ///
    /// Base ignores the roll. A roll outside `1..=6` deals nothing.
    ///
    /// ```
    /// use furry_fists::core::Attack;
    ///
    /// assert_eq!(Attack::Secondary.damage(4), 18);
    /// assert_eq!(Attack::Tertiary.damage(6), 50);
    /// assert_eq!(Attack::Base.damage(1), 5);
    /// ```
    #[must_use]
    pub fn damage(self, roll: u8) -> u32 {
        let table = match self {
            Attack::Base => return BASE_DAMAGE,
            Attack::Secondary => &SECONDARY_DAMAGE,
            Attack::Tertiary => &TERTIARY_DAMAGE,
        };
        debug_assert!((1..=6).contains(&roll), "roll {roll} outside 1..=6");
        usize::from(roll)
            .checked_sub(1)
            .and_then(|i| table.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Display label used by menus and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Attack::Base => "Base Attack",
            Attack::Secondary => "Secondary Attack",
            Attack::Tertiary => "Tertiary Attack",
        }
    }
}

impl std::fmt::Display for Attack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What the player asked to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Use an attack from the catalog.
    Attack(Attack),
    /// Leave the match immediately.
    Quit,
}

impl From<Attack> for PlayerCommand {
    fn from(attack: Attack) -> Self {
        PlayerCommand::Attack(attack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs() {
        assert_eq!(Attack::Base.cost(), 0);
        assert_eq!(Attack::Secondary.cost(), 25);
        assert_eq!(Attack::Tertiary.cost(), 50);
    }

    #[test]
    fn test_damage_tables() {
        let secondary: Vec<_> = (1..=6).map(|r| Attack::Secondary.damage(r)).collect();
        let tertiary: Vec<_> = (1..=6).map(|r| Attack::Tertiary.damage(r)).collect();

        assert_eq!(secondary, vec![5, 10, 15, 18, 23, 25]);
        assert_eq!(tertiary, vec![5, 10, 25, 35, 45, 50]);
        assert_eq!(Attack::Secondary.damage(1), Attack::Tertiary.damage(1));
    }

    #[test]
    fn test_base_ignores_roll() {
        for roll in 1..=6 {
            assert_eq!(Attack::Base.damage(roll), BASE_DAMAGE);
        }
    }

    #[test]
    fn test_affordable() {
        assert!(Attack::Base.affordable(0));
        assert!(!Attack::Secondary.affordable(24));
        assert!(Attack::Secondary.affordable(25));
        assert!(!Attack::Tertiary.affordable(49));
        assert!(Attack::Tertiary.affordable(50));
    }

    #[test]
    fn test_is_special() {
        assert!(!Attack::Base.is_special());
        assert!(Attack::Secondary.is_special());
        assert!(Attack::Tertiary.is_special());
    }

    #[test]
    fn test_command_from_attack() {
        assert_eq!(PlayerCommand::from(Attack::Tertiary), PlayerCommand::Attack(Attack::Tertiary));
    }
}
