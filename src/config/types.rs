// ttypong configuration types
// Defaults reproduce the classic game; every section may be left out

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::game::profile::{PointerMode, Profile, ProfileName, ScoringRule};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    // Built-in profile: "classic" or "rally"
    pub profile: ProfileName,

    // Per-field overrides of the chosen profile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<PointerMode>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            profile: ProfileName::Classic,
            countdown_seconds: None,
            scoring: None,
            pointer: None,
        }
    }
}

impl GameConfig {
    /// The named profile with any overrides applied.
    /// `countdown_seconds = 0` disables the countdown.
    pub fn profile(&self) -> Profile {
        let mut profile = Profile::named(self.profile);
        if let Some(seconds) = self.countdown_seconds {
            profile.countdown = (seconds > 0).then_some(seconds);
        }
        if let Some(scoring) = self.scoring {
            profile.scoring = scoring;
        }
        if let Some(pointer) = self.pointer {
            profile.pointer = pointer;
        }
        profile
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second (ball speed is per frame)
    pub target_fps: u64,

    // Colors (RGB values 0-255)
    pub background_color: [u8; 3],
    pub foreground_color: [u8; 3],
    pub score_color: [u8; 3],
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 200,
            background_color: [0, 0, 0],        // Black
            foreground_color: [255, 255, 255],  // White
            score_color: [255, 255, 255],       // White
            center_line_color: [255, 255, 255], // White
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,

    // "error", "warn", "info", "debug" or "trace"
    pub level: String,

    // Log file; defaults to ttypong.log in the temp directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn log_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("ttypong.log"))
    }
}
