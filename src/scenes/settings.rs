use tracing::{info, warn};

use crate::config::GameConfig;
use crate::engine::{Color, Engine};
use crate::error::GameError;
use crate::scene::{Scene, SceneAction};
use crate::scenes::{IntroScene, MatchSettings, PlayScene};
use crate::ui::widgets::{parse_number, parse_whole_number};
use crate::ui::{Align, InputBox};

const NAME_LEN: usize = 10;
const NUMBER_LEN: usize = 6;
const MENU: [&str; 4] = ["--------------", "V = View Intro", "P = Play Game", "Ctrl Q = Quit"];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Field {
    PlayerOne,
    PlayerTwo,
    Points,
    Gravity,
    Choice,
}

impl Field {
    const ALL: [Field; 5] = [Field::PlayerOne, Field::PlayerTwo, Field::Points, Field::Gravity, Field::Choice];

    fn y(self) -> i32 {
        match self {
            Field::PlayerOne => 50,
            Field::PlayerTwo => 80,
            Field::Points => 110,
            Field::Gravity => 140,
            Field::Choice => 290,
        }
    }
}

/// Where the settings screen hands over once the menu choice is made.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    ViewIntro,
    Play,
}

/// Sequential prompts for both names, the points to play to and gravity,
/// then the intro/play menu. Empty answers keep the configured defaults.
pub struct SettingsScene {
    settings: MatchSettings,
    boxes: Vec<InputBox>,
    current: usize,
}

impl SettingsScene {
    pub fn new(config: &GameConfig) -> Self {
        let settings = MatchSettings::from_config(config);
        let boxes = Field::ALL
            .iter()
            .map(|&field| {
                let input = match field {
                    Field::PlayerOne => InputBox::text(
                        format!("Name of Player 1 (Default = '{}'):  ", settings.names[0]),
                        NAME_LEN,
                    ),
                    Field::PlayerTwo => InputBox::text(
                        format!("Name of Player 2 (Default = '{}'):  ", settings.names[1]),
                        NAME_LEN,
                    ),
                    Field::Points => InputBox::numeric(
                        format!("Play to how many total points (Default = {})?  ", settings.target_score),
                        NUMBER_LEN,
                    ),
                    Field::Gravity => InputBox::numeric("Gravity in Meters/Sec (Earth = 9.8)?  ", NUMBER_LEN),
                    Field::Choice => InputBox::text("Your Choice?  ", 1).with_allowed("vp"),
                };
                input.with_blink()
            })
            .collect();
        Self { settings, boxes, current: 0 }
    }

    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Prompt of the question being asked.
    pub fn prompt(&self) -> &str {
        &self.boxes[self.current.min(self.boxes.len() - 1)].prompt
    }

    fn field(&self) -> Field {
        Field::ALL[self.current.min(Field::ALL.len() - 1)]
    }

    /// Store one submitted answer. `Some` once the menu choice is in.
    fn apply(&mut self, field: Field, text: &str) -> Result<Option<Choice>, GameError> {
        match field {
            Field::PlayerOne if !text.is_empty() => self.settings.names[0] = text.to_string(),
            Field::PlayerTwo if !text.is_empty() => self.settings.names[1] = text.to_string(),
            Field::Points if !text.is_empty() => {
                let points = parse_whole_number(text)?;
                if points == 0 {
                    return Err(GameError::InvalidNumericInput(text.to_string()));
                }
                self.settings.target_score = points;
            }
            Field::Gravity if !text.is_empty() => self.settings.gravity = parse_number(text)?,
            Field::Choice => {
                return Ok(Some(if text == "v" {
                    Choice::ViewIntro
                } else {
                    Choice::Play
                }));
            }
            _ => {}
        }
        Ok(None)
    }
}

impl Scene for SettingsScene {
    fn update(&mut self, engine: &mut Engine) -> Result<SceneAction, GameError> {
        let field = self.field();
        let dt = engine.dt();
        let Some(text) = self.boxes[self.current].update(&engine.input, dt)? else {
            return Ok(SceneAction::None);
        };

        match self.apply(field, &text) {
            Ok(None) => {
                self.current += 1;
                Ok(SceneAction::None)
            }
            Ok(Some(choice)) => {
                info!(
                    player_one = %self.settings.names[0],
                    player_two = %self.settings.names[1],
                    target = self.settings.target_score,
                    gravity = self.settings.gravity,
                    ?choice,
                    "Match configured"
                );
                let settings = self.settings.clone();
                Ok(SceneAction::Switch(match choice {
                    Choice::ViewIntro => Box::new(IntroScene::new(settings)),
                    Choice::Play => Box::new(PlayScene::new(settings)),
                }))
            }
            Err(GameError::InvalidNumericInput(bad)) => {
                warn!(input = %bad, ?field, "Rejected numeric input");
                self.boxes[self.current].reset();
                Ok(SceneAction::None)
            }
            Err(e) => Err(e),
        }
    }

    fn draw(&mut self, engine: &mut Engine) {
        let ctx = &mut engine.ctx;
        let mid = ctx.width() / 2;
        ctx.canvas.clear(Color::BLACK);

        let shown = (self.current + 1).min(self.boxes.len());
        for (input, field) in self.boxes[..shown].iter().zip(Field::ALL) {
            let x = mid - input.field_width(&ctx.font) / 2;
            input.draw(&mut ctx.canvas, &ctx.font, x, field.y(), Color::GRAY, Color::BLACK, Align::Left);
        }

        if self.field() == Field::Choice {
            for (i, line) in MENU.iter().enumerate() {
                let y = 170 + 30 * i as i32;
                ctx.font.draw_text(&mut ctx.canvas, line, mid - 10, y, Color::GRAY, Some(Color::BLACK), Align::Center);
            }
        }
    }

    fn name(&self) -> &'static str { "settings" }
}
