use crate::engine::{Color, Engine};
use crate::error::GameError;
use crate::scene::{Scene, SceneAction};
use crate::scenes::{SettingsScene, TITLE};
use crate::ui::{Align, StarBorder};

const INSTRUCTIONS: [&str; 5] = [
    "Your mission is to hit your opponent with the exploding",
    "banana by varying the angle and power of your throw, taking",
    "into account wind speed, gravity, and the city skyline.",
    "The wind speed is shown by a directional arrow at the bottom",
    "of the playing field, its length relative to its strength.",
];

/// Title card with the marching star border. Any key or tap moves on.
#[derive(Default)]
pub struct StartScene {
    border: StarBorder,
}

impl StartScene {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scene for StartScene {
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
        ctx.canvas.clear(Color::BLACK);
        self.border.draw(&mut ctx.canvas, &ctx.sprites.star);

        let bg = Some(Color::BLACK);
        ctx.font.draw_text(&mut ctx.canvas, TITLE, mid, 50, Color::WHITE, bg, Align::Center);
        for (i, line) in INSTRUCTIONS.iter().enumerate() {
            let y = 110 + 20 * i as i32;
            ctx.font.draw_text(&mut ctx.canvas, line, mid, y, Color::GRAY, bg, Align::Center);
        }
        ctx.font.draw_text(
            &mut ctx.canvas,
            "Press any key to continue",
            mid,
            300,
            Color::GRAY,
            bg,
            Align::Center,
        );
    }

    fn name(&self) -> &'static str { "start" }
}
