//! Match configuration types.
//!
//! Callers configure a match at setup by providing:
//! - `CombatRules`: the tunable numbers of turn resolution
//! - `CombatConfig`: starting resources, rules, and the quit variant
//! - `Roster`: the fighter names offered at setup
//!
//! Attack costs and damage tables are fixed in `Attack`; only the
//! side-effect thresholds around them are configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tunable numbers used while resolving a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatRules {
    /// Percent chance (0-100) that a positive-damage attack deals nothing.
    pub no_damage_chance: u32,

    /// A special attack rolling at least this refunds half its cost.
    pub refund_min_roll: u8,

    /// Target health strictly below this grants the attacker a bonus.
    pub low_health_threshold: u32,

    /// Stamina granted when the target ends a turn below the threshold.
    pub low_health_bonus: u32,
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            no_damage_chance: 10,
            refund_min_roll: 4,
            low_health_threshold: 50,
            low_health_bonus: 20,
        }
    }
}

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use furry_fists::core::CombatConfig;
///
/// let config = CombatConfig::default()
///     .with_starting_health(60)
///     .allow_quit(false);
///
/// assert_eq!(config.starting_health, 60);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Health both fighters start (and reset) with.
    pub starting_health: u32,

    /// Stamina both fighters start (and reset) with.
    pub starting_stamina: u32,

    /// Turn resolution numbers.
    pub rules: CombatRules,

    /// Whether the player may quit in the middle of a match.
    pub allow_quit: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            starting_health: 100,
            starting_stamina: 100,
            rules: CombatRules::default(),
            allow_quit: true,
        }
    }
}

impl CombatConfig {
    /// Set starting health.
    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set starting stamina.
    #[must_use]
    pub fn with_starting_stamina(mut self, stamina: u32) -> Self {
        self.starting_stamina = stamina;
        self
    }

    /// Replace the turn resolution rules.
    #[must_use]
    pub fn with_rules(mut self, rules: CombatRules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the no-damage chance in percent.
    #[must_use]
    pub fn with_no_damage_chance(mut self, percent: u32) -> Self {
        self.rules.no_damage_chance = percent;
        self
    }

    /// Enable or disable the mid-match quit command.
    #[must_use]
    pub fn allow_quit(mut self, allow: bool) -> Self {
        self.allow_quit = allow;
        self
    }

    /// Check that the configuration describes a playable match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_health == 0 {
            return Err(ConfigError::ZeroStartingHealth);
        }
        if self.starting_stamina == 0 {
            return Err(ConfigError::ZeroStartingStamina);
        }
        if self.rules.no_damage_chance > 100 {
            return Err(ConfigError::NoDamageChance(self.rules.no_damage_chance));
        }
        if !(1..=6).contains(&self.rules.refund_min_roll) {
            return Err(ConfigError::RefundRoll(self.rules.refund_min_roll));
        }
        Ok(())
    }
}

/// Fighters offered at setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            names: ["dog", "cat", "dolphin", "rat", "wolf", "panda", "goat", "sloth"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Roster {
    /// Create a roster from explicit names.
    ///
    /// Needs at least two distinct names so both sides can pick.
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        if unique.len() < 2 {
            return Err(ConfigError::RosterTooSmall(unique.len()));
        }
        Ok(Self { names: unique })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// The roster minus one name (the opponent can't mirror the player).
    #[must_use]
    pub fn without(&self, name: &str) -> Vec<String> {
        self.names.iter().filter(|n| *n != name).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CombatConfig::default();

        assert_eq!(config.starting_health, 100);
        assert_eq!(config.starting_stamina, 100);
        assert_eq!(config.rules.no_damage_chance, 10);
        assert_eq!(config.rules.refund_min_roll, 4);
        assert_eq!(config.rules.low_health_threshold, 50);
        assert_eq!(config.rules.low_health_bonus, 20);
        assert!(config.allow_quit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = CombatConfig::default()
            .with_starting_health(80)
            .with_starting_stamina(40)
            .with_no_damage_chance(0)
            .allow_quit(false);

        assert_eq!(config.starting_health, 80);
        assert_eq!(config.starting_stamina, 40);
        assert_eq!(config.rules.no_damage_chance, 0);
        assert!(!config.allow_quit);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            CombatConfig::default().with_starting_health(0).validate(),
            Err(ConfigError::ZeroStartingHealth)
        );
        assert_eq!(
            CombatConfig::default().with_starting_stamina(0).validate(),
            Err(ConfigError::ZeroStartingStamina)
        );
        assert_eq!(
            CombatConfig::default().with_no_damage_chance(101).validate(),
            Err(ConfigError::NoDamageChance(101))
        );

        let rules = CombatRules {
            refund_min_roll: 7,
            ..CombatRules::default()
        };
        assert_eq!(
            CombatConfig::default().with_rules(rules).validate(),
            Err(ConfigError::RefundRoll(7))
        );
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: CombatConfig =
            serde_json::from_str(r#"{"starting_health": 50, "rules": {"no_damage_chance": 0}}"#)
                .unwrap();

        assert_eq!(config.starting_health, 50);
        assert_eq!(config.starting_stamina, 100);
        assert_eq!(config.rules.no_damage_chance, 0);
        assert_eq!(config.rules.low_health_bonus, 20);
    }

    #[test]
    fn test_default_roster() {
        let roster = Roster::default();
        assert_eq!(roster.len(), 8);
        assert!(roster.contains("sloth"));
        assert!(!roster.contains("bear"));
    }

    #[test]
    fn test_roster_without() {
        let roster = Roster::default();
        let rest = roster.without("cat");

        assert_eq!(rest.len(), 7);
        assert!(!rest.iter().any(|n| n == "cat"));
    }

    #[test]
    fn test_roster_dedups_and_requires_two() {
        assert_eq!(Roster::new(["dog", "dog"]), Err(ConfigError::RosterTooSmall(1)));

        let roster = Roster::new(["dog", "cat", "dog"]).unwrap();
        assert_eq!(roster.names(), &["dog".to_string(), "cat".to_string()]);
    }
}
