//! Match results and what the caller may do next.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// How a finished match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The opponent's health reached zero.
    Victory,
    /// The player's health reached zero.
    Defeat,
    /// The player left mid-match.
    Quit,
}

impl MatchOutcome {
    /// Side that won, if anyone did.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            MatchOutcome::Victory => Some(Side::Player),
            MatchOutcome::Defeat => Some(Side::Opponent),
            MatchOutcome::Quit => None,
        }
    }
}

/// Whether a match is still being fought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    Finished(MatchOutcome),
}

impl MatchStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, MatchStatus::Finished(_))
    }

    #[must_use]
    pub const fn outcome(self) -> Option<MatchOutcome> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Finished(outcome) => Some(outcome),
        }
    }
}

/// Choices offered once a match is over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostMatchChoice {
    /// Level up and fight again at full resources (victory only).
    NextLevel,
    /// Fight the same level again at full resources (defeat only).
    ReplayLevel,
    /// Leave combat for the main menu.
    MainMenu,
    /// Exit the game.
    Quit,
}

impl PostMatchChoice {
    /// Options to show after `outcome`, in menu order.
    ///
    /// A quit ends the session outright, so it offers nothing.
    #[must_use]
    pub fn options_for(outcome: MatchOutcome) -> &'static [PostMatchChoice] {
        match outcome {
            MatchOutcome::Victory => &[
                PostMatchChoice::NextLevel,
                PostMatchChoice::MainMenu,
                PostMatchChoice::Quit,
            ],
            MatchOutcome::Defeat => &[
                PostMatchChoice::ReplayLevel,
                PostMatchChoice::MainMenu,
                PostMatchChoice::Quit,
            ],
            MatchOutcome::Quit => &[],
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PostMatchChoice::NextLevel => "Next Level",
            PostMatchChoice::ReplayLevel => "Replay Level",
            PostMatchChoice::MainMenu => "Back to Main Menu",
            PostMatchChoice::Quit => "Quit",
        }
    }
}
