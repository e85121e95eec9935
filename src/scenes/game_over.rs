use crate::engine::{Color, Engine};
use crate::error::GameError;
use crate::game::Player;
use crate::scene::{Scene, SceneAction};
use crate::scenes::{MatchSettings, SettingsScene};
use crate::ui::{Align, StarBorder};

const NAME_X: i32 = 225;
const SCORE_X: i32 = 395;

/// Final scores inside the star border. Any key or tap returns to settings
/// for a new match.
pub struct GameOverScene {
    settings: MatchSettings,
    scores: [u32; 2],
    border: StarBorder,
}

impl GameOverScene {
    pub fn new(settings: MatchSettings, scores: [u32; 2]) -> Self {
        Self { settings, scores, border: StarBorder::new() }
    }

    pub fn scores(&self) -> [u32; 2] { self.scores }
}

impl Scene for GameOverScene {
    fn update(&mut self, engine: &mut Engine) -> Result<SceneAction, GameError> {
        self.border.tick();
        if engine.input.any_key_or_tap() {
            return Ok(SceneAction::Switch(Box::new(SettingsScene::new(&engine.config))));
        }
        Ok(SceneAction::None)
    }

    fn draw(&mut self, engine: &mut Engine) {
        let ctx = &mut engine.ctx;
        let mid = ctx.width() / 2;
        let bg = Some(Color::BLACK);
        ctx.canvas.clear(Color::BLACK);
        self.border.draw(&mut ctx.canvas, &ctx.sprites.star);

        ctx.font.draw_text(&mut ctx.canvas, "GAME OVER!", mid, 120, Color::GRAY, bg, Align::Center);
        ctx.font.draw_text(&mut ctx.canvas, "Score:", mid, 155, Color::GRAY, bg, Align::Center);
        for (player, y) in [(Player::One, 170), (Player::Two, 185)] {
            let score = self.scores[player.index()].to_string();
            ctx.font.draw_text(&mut ctx.canvas, self.settings.name(player), NAME_X, y, Color::GRAY, bg, Align::Left);
            ctx.font.draw_text(&mut ctx.canvas, &score, SCORE_X, y, Color::GRAY, bg, Align::Left);
        }
        ctx.font.draw_text(
            &mut ctx.canvas,
            "Press any key to continue",
            mid,
            298,
            Color::GRAY,
            bg,
            Align::Center,
        );
    }

    fn name(&self) -> &'static str { "game_over" }
}
