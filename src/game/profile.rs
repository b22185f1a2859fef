// Game profiles: the two variants of the game differ in countdown, scoring
// and pointer handling. Each is a plain bundle of those three choices.

use serde::{Deserialize, Serialize};

/// Which boundary hits award points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    /// Walls only reflect the ball
    Off,
    /// Hitting a side wall scores for the opposite side
    SideWalls,
}

/// How pointer motion drives the human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerMode {
    /// Vertical pointer delta is added to the paddle top
    Relative,
    /// Pointer y becomes the paddle top
    Absolute,
}

/// Named built-in profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileName {
    /// Countdown, side-wall scoring, relative pointer
    Classic,
    /// No countdown, no scoring, absolute pointer
    Rally,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub countdown: Option<u32>,
    pub scoring: ScoringRule,
    pub pointer: PointerMode,
}

impl Profile {
    pub fn classic() -> Self {
        Self {
            countdown: Some(3),
            scoring: ScoringRule::SideWalls,
            pointer: PointerMode::Relative,
        }
    }

    pub fn rally() -> Self {
        Self {
            countdown: None,
            scoring: ScoringRule::Off,
            pointer: PointerMode::Absolute,
        }
    }

    pub fn named(name: ProfileName) -> Self {
        match name {
            ProfileName::Classic => Self::classic(),
            ProfileName::Rally => Self::rally(),
        }
    }

    pub fn scores(&self) -> bool {
        self.scoring == ScoringRule::SideWalls
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::classic()
    }
}
