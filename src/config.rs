//! Game configuration.
//!
//! Every field has a default matching the classic game, so a missing file or
//! a partial file is fine. An explicitly requested file that cannot be read or
//! parsed is an error; silently falling back would hide typos in the path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::game::Player;
use crate::window::WindowMode;

/// Smallest playfield that still yields enough buildings for placement.
pub const MIN_WIDTH: u32 = 300;
pub const MIN_HEIGHT: u32 = 200;
/// Largest side the canvas texture may have on default GPU limits.
pub const MAX_SIDE: u32 = 8192;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

// ── Sections ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Playfield width in pixels. Also the window's initial inner width.
    pub width: u32,
    pub height: u32,
    /// Fixed simulation rate; every animation delay is measured in these ticks.
    pub updates_per_second: u32,
    pub window_mode: WindowMode,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            updates_per_second: 30,
            window_mode: WindowMode::Windowed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Name used when player 1 leaves the prompt empty.
    pub player_one: String,
    pub player_two: String,
    /// Points needed to win, used when the prompt is left empty.
    pub target_score: u32,
    /// Gravity in m/s², used when the prompt is left empty.
    pub gravity: f32,
    /// Who throws first in every round (1 or 2).
    pub starting_player: u8,
    /// Seed for skyline, placement and wind. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: "Player 1".into(),
            player_two: "Player 2".into(),
            target_score: 3,
            gravity: 9.8,
            starting_player: 1,
            seed: None,
        }
    }
}

// ── GameConfig ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    #[serde(rename = "game")]
    pub match_rules: MatchConfig,
}

impl GameConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate config text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value, min) in [
            ("screen.width", self.screen.width, MIN_WIDTH),
            ("screen.height", self.screen.height, MIN_HEIGHT),
        ] {
            if value < min {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is below the minimum of {min}"),
                });
            }
            if value > MAX_SIDE {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is above the maximum of {MAX_SIDE}"),
                });
            }
        }
        if self.screen.updates_per_second == 0 {
            return Err(ConfigError::Invalid {
                field: "screen.updates_per_second",
                reason: "must be at least 1".into(),
            });
        }
        if Player::from_number(self.match_rules.starting_player).is_none() {
            return Err(ConfigError::Invalid {
                field: "game.starting_player",
                reason: format!("{} is not 1 or 2", self.match_rules.starting_player),
            });
        }
        if !self.match_rules.gravity.is_finite() {
            return Err(ConfigError::Invalid {
                field: "game.gravity",
                reason: "must be a finite number".into(),
            });
        }
        Ok(())
    }

    /// The validated starting player. Falls back to player 1 for configs
    /// built in code without going through `validate`.
    pub fn starting_player(&self) -> Player {
        Player::from_number(self.match_rules.starting_player).unwrap_or(Player::One)
    }

    /// Simulation tick length in seconds.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.screen.updates_per_second.max(1) as f32
    }
}
