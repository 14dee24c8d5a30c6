//! Audio cues and the volume scale.
//!
//! The engine never plays sound. It names a cue; whoever owns the audio
//! device turns the cue into an `AudioCommand` at the current volume.

use serde::{Deserialize, Serialize};

/// Sounds the game asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// Looping main menu track.
    MenuMusic,
    /// Looping combat track.
    GameplayMusic,
    /// Short click on any menu selection.
    MenuSelect,
    /// Played once when the player wins.
    Victory,
    /// Played once when the player loses.
    Defeat,
}

impl AudioCue {
    /// Asset file name for this cue.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            AudioCue::MenuMusic => "menu_music.wav",
            AudioCue::GameplayMusic => "gameplay_music.wav",
            AudioCue::MenuSelect => "menu_select.wav",
            AudioCue::Victory => "victory.wav",
            AudioCue::Defeat => "defeat.wav",
        }
    }

    /// Music loops until replaced; effects play once.
    #[must_use]
    pub const fn is_music(self) -> bool {
        matches!(self, AudioCue::MenuMusic | AudioCue::GameplayMusic)
    }
}

/// "Play cue X at Y decibels."
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioCommand {
    pub cue: AudioCue,
    pub decibels: f32,
}

/// Menu volume level on a 1-10 scale.
///
/// Level 1 is effectively silent (-80 dB), level 10 is full gain (+6 dB),
/// with equal decibel steps in between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Volume(u8);

impl Volume {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    const MIN_DB: f32 = -80.0;
    const MAX_DB: f32 = 6.0;

    /// Create a volume level, clamped into `1..=10`.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Gain in decibels for this level.
    ///
    /// ```
    /// use furry_fists::events::Volume;
    ///
    /// assert_eq!(Volume::new(1).decibels(), -80.0);
    /// assert_eq!(Volume::new(10).decibels(), 6.0);
    /// ```
    #[must_use]
    pub fn decibels(self) -> f32 {
        let span = Self::MAX_DB - Self::MIN_DB;
        let steps = f32::from(self.0.saturating_sub(Self::MIN));
        Self::MIN_DB + span * steps / f32::from(Self::MAX - Self::MIN)
    }

    /// Build the command for `cue` at this volume.
    #[must_use]
    pub fn command(self, cue: AudioCue) -> AudioCommand {
        AudioCommand {
            cue,
            decibels: self.decibels(),
        }
    }
}

impl From<u8> for Volume {
    fn from(level: u8) -> Self {
        Volume::new(level)
    }
}

impl From<Volume> for u8 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_clamps() {
        assert_eq!(Volume::new(0).level(), 1);
        assert_eq!(Volume::new(200).level(), 10);
        assert_eq!(Volume::new(5).level(), 5);
    }

    #[test]
    fn test_volume_is_linear_in_decibels() {
        let step = Volume::new(2).decibels() - Volume::new(1).decibels();
        for level in 2..=10 {
            let delta = Volume::new(level).decibels() - Volume::new(level - 1).decibels();
            assert!((delta - step).abs() < 1e-4);
        }
        assert!((step - 86.0 / 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_volume_deserialize_clamps() {
        let low: Volume = serde_json::from_str("0").unwrap();
        let high: Volume = serde_json::from_str("200").unwrap();

        assert_eq!(low.level(), 1);
        assert_eq!(low.decibels(), -80.0);
        assert_eq!(high.level(), 10);
        assert_eq!(high.decibels(), 6.0);
        assert_eq!(serde_json::to_string(&Volume::new(4)).unwrap(), "4");
    }

    #[test]
    fn test_command_carries_cue() {
        let command = Volume::new(10).command(AudioCue::Victory);
        assert_eq!(command.cue, AudioCue::Victory);
        assert_eq!(command.decibels, 6.0);
    }

    #[test]
    fn test_music_cues() {
        assert!(AudioCue::GameplayMusic.is_music());
        assert!(!AudioCue::Defeat.is_music());
        assert_eq!(AudioCue::MenuSelect.file_name(), "menu_select.wav");
    }
}
