//! The game's screens, in the order a player meets them: start, settings,
//! optional intro, play and game over. Game over leads back to settings.

pub mod game_over;
pub mod intro;
pub mod play;
pub mod settings;
pub mod start;

pub use game_over::GameOverScene;
pub use intro::IntroScene;
pub use play::PlayScene;
pub use settings::SettingsScene;
pub use start::StartScene;

use crate::config::GameConfig;
use crate::game::Player;

/// Title line shared by the start and intro screens.
pub const TITLE: &str = "G  O  R  I  L  L  A  S";

/// What the settings screen decided for one match.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSettings {
    pub names: [String; 2],
    pub target_score: u32,
    pub gravity: f32,
}

impl MatchSettings {
    pub fn from_config(config: &GameConfig) -> Self {
        let rules = &config.match_rules;
        Self {
            names: [rules.player_one.clone(), rules.player_two.clone()],
            target_score: rules.target_score.max(1),
            gravity: rules.gravity,
        }
    }

    pub fn name(&self, player: Player) -> &str {
        &self.names[player.index()]
    }
}
