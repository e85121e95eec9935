use crate::animation::Dance;
use crate::engine::{Color, Engine};
use crate::error::GameError;
use crate::scene::{Scene, SceneAction};
use crate::scenes::{MatchSettings, PlayScene, TITLE};
use crate::ui::Align;

/// Horizontal distance of each dancer from the middle of the screen.
const DANCER_OFFSET: i32 = 47;
const DANCER_Y: i32 = 175;

/// "Starring" card with both gorillas dancing. Ignores keys other than the
/// quit chord and starts the match when the dance ends.
pub struct IntroScene {
    settings: MatchSettings,
    dance: Dance,
}

impl IntroScene {
    pub fn new(settings: MatchSettings) -> Self {
        Self { settings, dance: Dance::intro() }
    }
}

impl Scene for IntroScene {
    fn update(&mut self, engine: &mut Engine) -> Result<SceneAction, GameError> {
        self.dance.advance(engine.dt());
        if self.dance.is_finished() {
            return Ok(SceneAction::Switch(Box::new(PlayScene::new(self.settings.clone()))));
        }
        Ok(SceneAction::None)
    }

    fn draw(&mut self, engine: &mut Engine) {
        let ctx = &mut engine.ctx;
        let mid = ctx.width() / 2;
        let bg = Some(Color::SKY);
        ctx.canvas.clear(Color::SKY);

        ctx.font.draw_text(&mut ctx.canvas, TITLE, mid, 15, Color::WHITE, bg, Align::Center);
        ctx.font.draw_text(&mut ctx.canvas, "STARRING:", mid, 55, Color::WHITE, bg, Align::Center);
        let starring = format!("{} AND {}", self.settings.names[0], self.settings.names[1]);
        ctx.font.draw_text(&mut ctx.canvas, &starring, mid, 115, Color::WHITE, bg, Align::Center);

        if let Some(arms) = self.dance.pose() {
            ctx.canvas.blit_sprite(ctx.sprites.gorilla(arms), mid - DANCER_OFFSET, DANCER_Y);
            ctx.canvas.blit_sprite(ctx.sprites.gorilla(arms.flip()), mid + DANCER_OFFSET, DANCER_Y);
        }
    }

    fn name(&self) -> &'static str { "intro" }
}
