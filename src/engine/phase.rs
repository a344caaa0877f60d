//! Session phases, game modes, and difficulty tiers.

use serde::{Deserialize, Serialize};

/// Where the session currently is.
///
/// `StudySelection`/`StudyList` form the non-gameplay browsing branch;
/// `Error` is reached only from `Loading` on a catalog fetch failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Menu,
    LevelSelection,
    StudySelection,
    StudyList,
    Loading,
    Playing,
    GameOver,
    Error,
}

/// What the player is asked to identify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Show a flag, answer with country names.
    Flags,
    /// Show a country name, answer with capital names.
    Capitals,
}

/// Difficulty tier. Membership is fixed by code set, see `catalog::codes`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Rounds in a full game at this tier.
    #[must_use]
    pub fn total_rounds(self) -> u32 {
        10
    }

    /// Stable lowercase label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Persistence key for the tier-completed flag.
    #[must_use]
    pub fn storage_key(self) -> String {
        format!("completed_{}", self.label())
    }
}
