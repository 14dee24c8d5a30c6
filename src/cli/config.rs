//! Console configuration.
use std::env;
use std::time::Duration;

use furry_fists::{CombatConfig, Volume};

/// Settings for the console front-end.
///
/// Gameplay numbers live in `CombatConfig`; everything else here only
/// affects presentation.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub combat: CombatConfig,

    /// Seed for the whole session. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Pause after each line of combat narration.
    pub pacing: Duration,

    /// Initial audio volume on the 1-10 scale.
    pub volume: Volume,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            seed: None,
            pacing: Duration::from_millis(700),
            volume: Volume::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FURRY_FISTS_SEED` - Session seed (default: random)
    /// - `FURRY_FISTS_PACING_MS` - Delay between narration lines (default: 700)
    /// - `FURRY_FISTS_VOLUME` - Volume 1-10 (default: 8)
    /// - `FURRY_FISTS_ALLOW_QUIT` - Offer "Quit" during combat (default: true;
    ///   accepts true/false, 1/0, yes/no, on/off)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("FURRY_FISTS_SEED") {
            config.seed = Some(seed);
        }
        if let Some(ms) = read_env::<u64>("FURRY_FISTS_PACING_MS") {
            config.pacing = Duration::from_millis(ms);
        }
        if let Some(level) = read_env::<u8>("FURRY_FISTS_VOLUME") {
            config.volume = Volume::new(level);
        }
        if let Some(allow) = read_env_bool("FURRY_FISTS_ALLOW_QUIT") {
            config.combat = config.combat.allow_quit(allow);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        for on in ["true", "1", "yes", "ON", "Yes"] {
            assert_eq!(parse_bool(on), Some(true), "{on}");
        }
        for off in ["false", "0", "no", "off", "OFF"] {
            assert_eq!(parse_bool(off), Some(false), "{off}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }
}
