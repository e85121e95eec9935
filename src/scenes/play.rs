use tracing::{debug, warn};

use crate::animation::Dance;
use crate::engine::{Color, Engine, RenderContext};
use crate::error::GameError;
use crate::game::{MatchState, Player, Resolution, Round};
use crate::input::InputState;
use crate::scene::{Scene, SceneAction};
use crate::scenes::{GameOverScene, MatchSettings};
use crate::shot::{Shot, ShotOutcome, ShotParams, ShotPhase};
use crate::sprite::Arms;
use crate::ui::widgets::parse_whole_number;
use crate::ui::{Align, InputBox};

const AIM_LEN: usize = 3;
const NAME_Y: i32 = 2;
const ANGLE_Y: i32 = 18;
const VELOCITY_Y: i32 = 34;
/// HUD text sits this far in from the screen edge.
const MARGIN: i32 = 2;

// ── Aim ───────────────────────────────────────────────────────────────────────

/// Angle then velocity prompts for the player whose turn it is.
#[derive(Clone, Debug)]
pub struct Aim {
    angle: InputBox,
    velocity: InputBox,
    angle_value: Option<u32>,
}

impl Aim {
    pub fn new() -> Self {
        Self {
            angle: InputBox::numeric("Angle:  ", AIM_LEN),
            velocity: InputBox::numeric("Velocity:  ", AIM_LEN),
            angle_value: None,
        }
    }

    pub fn angle(&self) -> Option<u32> { self.angle_value }

    /// Returns `(angle, velocity)` once both have been entered. Empty or
    /// unparsable answers re-prompt.
    pub fn update(&mut self, input: &InputState, dt: f32) -> Result<Option<(u32, u32)>, GameError> {
        let Some(angle) = self.angle_value else {
            if let Some(text) = self.angle.update(input, dt)? {
                self.angle_value = accept_number(&mut self.angle, &text)?;
            }
            return Ok(None);
        };
        match self.velocity.update(input, dt)? {
            Some(text) => Ok(accept_number(&mut self.velocity, &text)?.map(|v| (angle, v))),
            None => Ok(None),
        }
    }

    fn draw(&self, ctx: &mut RenderContext, player: Player) {
        let width = self.velocity.field_width(&ctx.font).max(self.angle.field_width(&ctx.font));
        let x = match player {
            Player::One => MARGIN,
            Player::Two => ctx.width() - MARGIN - width,
        };
        self.angle.draw(&mut ctx.canvas, &ctx.font, x, ANGLE_Y, Color::WHITE, Color::SKY, Align::Left);
        if self.angle_value.is_some() {
            self.velocity.draw(&mut ctx.canvas, &ctx.font, x, VELOCITY_Y, Color::WHITE, Color::SKY, Align::Left);
        }
    }
}

impl Default for Aim {
    fn default() -> Self {
        Self::new()
    }
}

fn accept_number(input: &mut InputBox, text: &str) -> Result<Option<u32>, GameError> {
    if text.is_empty() {
        input.reset();
        return Ok(None);
    }
    match parse_whole_number(text) {
        Ok(value) => Ok(Some(value)),
        Err(GameError::InvalidNumericInput(bad)) => {
            warn!(input = %bad, prompt = %input.prompt.trim(), "Rejected numeric input");
            input.reset();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// ── PlayScene ─────────────────────────────────────────────────────────────────

pub enum Phase {
    Aiming(Aim),
    Throwing(Shot),
    /// The scorer's victory dance after a gorilla was hit.
    Celebrating { scorer: Player, dance: Dance, resolution: Resolution },
}

/// One match: rounds of alternating throws until a player reaches the
/// target score.
pub struct PlayScene {
    settings: MatchSettings,
    match_state: MatchState,
    round: Option<Round>,
    phase: Phase,
}

impl PlayScene {
    pub fn new(settings: MatchSettings) -> Self {
        let match_state = MatchState::new(settings.target_score, Player::One);
        Self { settings, match_state, round: None, phase: Phase::Aiming(Aim::new()) }
    }

    pub fn settings(&self) -> &MatchSettings { &self.settings }
    pub fn match_state(&self) -> &MatchState { &self.match_state }
    pub fn round(&self) -> Option<&Round> { self.round.as_ref() }
    pub fn phase(&self) -> &Phase { &self.phase }

    fn new_round(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        let ctx = &engine.ctx;
        let (width, height) = (ctx.canvas.width(), ctx.canvas.height());
        let (gorilla, banana, sun) = (ctx.sprites.gorilla_size(), ctx.banana_sizes(), ctx.sun_rect());
        self.round = Some(Round::generate(width, height, gorilla, banana, sun, &mut engine.rng)?);
        self.phase = Phase::Aiming(Aim::new());
        Ok(())
    }

    fn throw(&self, round: &Round, angle: u32, velocity: u32) -> Shot {
        let thrower = self.match_state.turn();
        let params = ShotParams::for_player(
            thrower,
            angle as f32,
            velocity as f32,
            round.wind as f32,
            self.settings.gravity,
        );
        debug!(?thrower, angle, velocity, wind = round.wind, "Throw");
        Shot::new(thrower, params, &round.playfield)
    }

    /// Gorilla hidden because it was just blown up, if any.
    fn blown_up(&self) -> Option<Player> {
        match &self.phase {
            Phase::Throwing(shot) => match shot.phase() {
                ShotPhase::Exploding { outcome: ShotOutcome::HitGorilla(p), .. } => Some(*p),
                _ => None,
            },
            Phase::Celebrating { scorer, .. } => Some(scorer.other()),
            Phase::Aiming(_) => None,
        }
    }

    fn pose(&self, player: Player) -> Arms {
        match &self.phase {
            Phase::Throwing(shot) if shot.is_armed() && shot.thrower() == player => match player {
                Player::One => Arms::LeftUp,
                Player::Two => Arms::RightUp,
            },
            Phase::Celebrating { scorer, dance, .. } if *scorer == player => {
                dance.pose().unwrap_or(Arms::Down)
            }
            _ => Arms::Down,
        }
    }
}

impl Scene for PlayScene {
    fn on_enter(&mut self, engine: &mut Engine) -> Result<(), GameError> {
        self.match_state = MatchState::new(self.settings.target_score, engine.config.starting_player());
        self.new_round(engine)
    }

    fn update(&mut self, engine: &mut Engine) -> Result<SceneAction, GameError> {
        if self.round.is_none() {
            self.new_round(engine)?;
        }
        let dt = engine.dt();

        match &mut self.phase {
            Phase::Aiming(aim) => {
                if let Some((angle, velocity)) = aim.update(&engine.input, dt)? {
                    if let Some(round) = self.round.as_ref() {
                        self.phase = Phase::Throwing(self.throw(round, angle, velocity));
                    }
                }
            }
            Phase::Throwing(shot) => {
                let Some(round) = self.round.as_mut() else {
                    return Ok(SceneAction::None);
                };
                shot.advance(&round.playfield, &mut round.skyline, dt);
                if let Some(outcome) = shot.outcome() {
                    self.phase = match self.match_state.resolve(outcome) {
                        Resolution::NextTurn => Phase::Aiming(Aim::new()),
                        resolution @ Resolution::RoundOver { scorer }
                        | resolution @ Resolution::MatchOver { winner: scorer } => {
                            Phase::Celebrating { scorer, dance: Dance::victory(), resolution }
                        }
                    };
                }
            }
            Phase::Celebrating { dance, resolution, .. } => {
                dance.advance(dt);
                if !dance.is_finished() {
                    return Ok(SceneAction::None);
                }
                if matches!(resolution, Resolution::MatchOver { .. }) {
                    return Ok(SceneAction::Switch(Box::new(GameOverScene::new(
                        self.settings.clone(),
                        self.match_state.scores(),
                    ))));
                }
                self.new_round(engine)?;
            }
        }
        Ok(SceneAction::None)
    }

    fn draw(&mut self, engine: &mut Engine) {
        let ctx = &mut engine.ctx;
        let Some(round) = self.round.as_ref() else {
            ctx.canvas.clear(Color::SKY);
            return;
        };
        let (w, h) = (ctx.width(), ctx.height());
        let mid = w / 2;
        ctx.canvas.blit_canvas(round.skyline.canvas(), 0, 0);

        let hidden = self.blown_up();
        for player in [Player::One, Player::Two] {
            if hidden == Some(player) {
                continue;
            }
            let at = round.gorilla(player);
            ctx.canvas.blit_sprite(ctx.sprites.gorilla(self.pose(player)), at.x, at.y);
        }

        let mut shocked = false;
        if let Phase::Throwing(shot) = &self.phase {
            shocked = shot.sun_shocked();
            if let Some((rect, orientation)) = shot.banana() {
                ctx.canvas.blit_sprite(ctx.sprites.banana(orientation), rect.x, rect.y);
            }
        }
        let sun = ctx.sun_rect();
        ctx.canvas.blit_sprite(ctx.sprites.sun(shocked), sun.x, sun.y);

        // Wind arrow along the bottom edge.
        if round.wind != 0 {
            let y = h - 5;
            let tip = mid + round.wind * 3;
            let head = if round.wind > 0 { -2 } else { 2 };
            ctx.canvas.draw_line(mid, y, tip, y, Color::EXPLOSION);
            ctx.canvas.draw_line(tip, y, tip + head, y - 2, Color::EXPLOSION);
            ctx.canvas.draw_line(tip, y, tip + head, y + 2, Color::EXPLOSION);
        }

        let bg = Some(Color::SKY);
        ctx.font.draw_text(&mut ctx.canvas, self.settings.name(Player::One), MARGIN, NAME_Y, Color::WHITE, bg, Align::Left);
        ctx.font.draw_text(&mut ctx.canvas, self.settings.name(Player::Two), w - MARGIN, NAME_Y, Color::WHITE, bg, Align::Right);

        let [one, two] = self.match_state.scores();
        let score = format!("{one}>Score<{two}");
        ctx.font.draw_text(&mut ctx.canvas, &score, mid, h - 20, Color::WHITE, bg, Align::Center);

        if let Phase::Aiming(aim) = &self.phase {
            aim.draw(ctx, self.match_state.turn());
        }
    }

    fn name(&self) -> &'static str { "play" }
}
