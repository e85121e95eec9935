//! Shot simulation: one banana from the throw to its outcome.
//!
//! The banana follows a closed-form parabola sampled every 0.1 time units
//! starting at `t = 1.0`. Each sample runs the collision checks in a fixed
//! order (off-screen, sun, gorilla 1, gorilla 2, skyline) and the first one
//! that fires decides the outcome.

use glam::Vec2;
use tracing::debug;

use crate::explosion::Explosion;
use crate::game::Player;
use crate::geometry::Rect;
use crate::skyline::Skyline;

/// Simulated time between two samples.
pub const TIME_STEP: f32 = 0.1;
/// `t` of the first sample.
pub const START_TIME: f32 = 1.0;
/// Wall-clock seconds between two samples while the banana is in flight.
pub const FLIGHT_STEP_DELAY: f32 = 0.02;
/// How long the thrower holds the arm-up pose before the banana leaves.
pub const THROW_POSE_DURATION: f32 = 0.3;
/// Samples after which a shot that never lands is called a miss. Only
/// reachable with zero gravity.
pub const MAX_STEPS: u32 = 10_000;

/// Horizontal margins: a banana at or beyond these is off the playfield.
const LEFT_LIMIT: f32 = 3.0;
const RIGHT_MARGIN: f32 = 10.0;

// ── Orientation ──────────────────────────────────────────────────────────────

/// Which way the spinning banana currently faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Right,
    Up,
    Left,
    Down,
}

impl Orientation {
    /// Spin one quarter turn: right, up, left, down, right.
    pub fn next(self) -> Self {
        match self {
            Orientation::Right => Orientation::Up,
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
        }
    }
}

/// Sprite sizes of the four banana frames.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BananaSizes {
    pub up: (i32, i32),
    pub down: (i32, i32),
    pub left: (i32, i32),
    pub right: (i32, i32),
}

impl BananaSizes {
    pub fn get(&self, orientation: Orientation) -> (i32, i32) {
        match orientation {
            Orientation::Up => self.up,
            Orientation::Down => self.down,
            Orientation::Left => self.left,
            Orientation::Right => self.right,
        }
    }

    /// Hit box of the banana drawn at `(x, y)`. The upright frames sit two
    /// pixels left and two down from the sample point.
    pub fn hit_box(&self, x: f32, y: f32, orientation: Orientation) -> Rect {
        let (w, h) = self.get(orientation);
        let r = Rect::new(x as i32, y as i32, w, h);
        match orientation {
            Orientation::Up | Orientation::Down => r.offset(-2, 2),
            Orientation::Left | Orientation::Right => r,
        }
    }
}

// ── Parameters ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShotParams {
    /// Launch angle in degrees, already mirrored for player 2.
    pub angle: f32,
    pub velocity: f32,
    /// Signed; positive blows toward the right.
    pub wind: f32,
    pub gravity: f32,
}

impl ShotParams {
    /// Build parameters from what `player` typed. Player 2 aims leftward, so
    /// their angle is mirrored to `180 - angle`.
    pub fn for_player(player: Player, entered_angle: f32, velocity: f32, wind: f32, gravity: f32) -> Self {
        Self { angle: launch_angle(player, entered_angle), velocity, wind, gravity }
    }
}

pub fn launch_angle(player: Player, entered: f32) -> f32 {
    match player {
        Player::One => entered,
        Player::Two => 180.0 - entered,
    }
}

/// Banana position at simulated time `t`.
///
/// `x(t) = x0 + v·cos(θ)·t + ½·(wind/5)·t²`
/// `y(t) = y0 − v·sin(θ)·t + ½·g·t²`
pub fn trajectory(start: Vec2, params: &ShotParams, t: f32) -> Vec2 {
    let theta = params.angle.to_radians();
    let x = start.x + params.velocity * theta.cos() * t + 0.5 * (params.wind / 5.0) * t * t;
    let y = start.y - params.velocity * theta.sin() * t + 0.5 * params.gravity * t * t;
    Vec2::new(x, y)
}

// ── Playfield ────────────────────────────────────────────────────────────────

/// Everything a shot collides with, except the skyline itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub sun: Rect,
    /// Hit boxes of player 1's and player 2's gorilla.
    pub gorillas: [Rect; 2],
    pub banana: BananaSizes,
}

impl Playfield {
    pub fn gorilla(&self, player: Player) -> Rect {
        self.gorillas[player.index()]
    }

    /// Where `thrower`'s banana starts: above the gorilla's head, on its
    /// left edge for player 1 and its right edge for player 2.
    pub fn launch_point(&self, thrower: Player) -> Vec2 {
        let g = self.gorilla(thrower);
        let x = match thrower {
            Player::One => g.x,
            Player::Two => g.right(),
        };
        Vec2::new(x as f32, (g.y - 2 * self.banana.up.1) as f32)
    }

    fn is_off_screen(&self, p: Vec2) -> bool {
        p.x >= self.width as f32 - RIGHT_MARGIN || p.x <= LEFT_LIMIT || p.y >= self.height as f32
    }
}

// ── Outcomes ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The banana struck this player's gorilla (possibly the thrower's own).
    HitGorilla(Player),
    HitBuilding,
    Miss,
}

/// Result of one sample.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// Still flying; draw the banana here with this frame.
    Flying { hit_box: Rect, orientation: Orientation },
    /// The shot is over. `impact` is the hit box that struck, if any.
    Resolved { outcome: ShotOutcome, impact: Option<Rect> },
}

// ── Shot ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub enum ShotPhase {
    /// The thrower is holding the banana up.
    Armed { remaining: f32 },
    InFlight,
    Exploding { explosion: Explosion, outcome: ShotOutcome },
    Done(ShotOutcome),
}

#[derive(Clone, Debug)]
pub struct Shot {
    thrower: Player,
    params: ShotParams,
    start: Vec2,
    t: f32,
    steps: u32,
    orientation: Orientation,
    sun_shocked: bool,
    phase: ShotPhase,
    accumulator: f32,
    banana: Option<(Rect, Orientation)>,
}

impl Shot {
    pub fn new(thrower: Player, params: ShotParams, field: &Playfield) -> Self {
        Self {
            thrower,
            params,
            start: field.launch_point(thrower),
            t: START_TIME,
            steps: 0,
            orientation: Orientation::Up,
            sun_shocked: false,
            phase: ShotPhase::Armed { remaining: THROW_POSE_DURATION },
            accumulator: 0.0,
            banana: None,
        }
    }

    pub fn thrower(&self) -> Player { self.thrower }
    pub fn params(&self) -> &ShotParams { &self.params }
    pub fn start(&self) -> Vec2 { self.start }
    pub fn time(&self) -> f32 { self.t }
    pub fn phase(&self) -> &ShotPhase { &self.phase }
    pub fn sun_shocked(&self) -> bool { self.sun_shocked }
    pub fn is_armed(&self) -> bool { matches!(self.phase, ShotPhase::Armed { .. }) }

    /// Banana to draw this frame, if one is in the air.
    pub fn banana(&self) -> Option<(Rect, Orientation)> {
        match self.phase {
            ShotPhase::InFlight => self.banana,
            _ => None,
        }
    }

    pub fn outcome(&self) -> Option<ShotOutcome> {
        match self.phase {
            ShotPhase::Done(o) => Some(o),
            _ => None,
        }
    }

    /// Take one sample at the current `t` and run the collision checks.
    pub fn step(&mut self, field: &Playfield, skyline: &Skyline) -> Step {
        let p = trajectory(self.start, &self.params, self.t);
        let in_play = !field.is_off_screen(p);

        let orientation = self.orientation;
        let hit_box = field.banana.hit_box(p.x, p.y, orientation);
        self.orientation = orientation.next();
        self.steps += 1;

        if !in_play {
            return Step::Resolved { outcome: ShotOutcome::Miss, impact: None };
        }

        // Above the top edge the banana flies on unchecked.
        if p.y > 0.0 {
            if hit_box.intersects(&field.sun) {
                self.sun_shocked = true;
            }
            for player in [Player::One, Player::Two] {
                if hit_box.intersects(&field.gorilla(player)) {
                    return Step::Resolved {
                        outcome: ShotOutcome::HitGorilla(player),
                        impact: Some(hit_box),
                    };
                }
            }
            if skyline.is_occupied(hit_box) {
                return Step::Resolved { outcome: ShotOutcome::HitBuilding, impact: Some(hit_box) };
            }
        }

        if self.steps >= MAX_STEPS {
            return Step::Resolved { outcome: ShotOutcome::Miss, impact: None };
        }

        self.t += TIME_STEP;
        Step::Flying { hit_box, orientation }
    }

    fn resolve(&mut self, outcome: ShotOutcome, impact: Option<Rect>, screen_height: u32) {
        debug!(thrower = ?self.thrower, ?outcome, t = self.t, "Shot resolved");
        self.banana = None;
        self.phase = match (outcome, impact) {
            (ShotOutcome::HitGorilla(_), Some(r)) => {
                let (cx, cy) = r.center();
                ShotPhase::Exploding { explosion: Explosion::gorilla(cx, cy), outcome }
            }
            (ShotOutcome::HitBuilding, Some(r)) => {
                let (cx, cy) = r.center();
                ShotPhase::Exploding { explosion: Explosion::building(cx, cy, screen_height), outcome }
            }
            _ => ShotPhase::Done(outcome),
        };
    }

    /// Drive the shot by `dt` seconds of wall time. Explosions carve into
    /// `skyline` as they play.
    pub fn advance(&mut self, field: &Playfield, skyline: &mut Skyline, dt: f32) {
        match &mut self.phase {
            ShotPhase::Armed { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    debug!(thrower = ?self.thrower, params = ?self.params, "Banana thrown");
                    self.phase = ShotPhase::InFlight;
                    self.accumulator = 0.0;
                }
            }
            ShotPhase::InFlight => {
                self.accumulator += dt;
                while self.accumulator >= FLIGHT_STEP_DELAY {
                    self.accumulator -= FLIGHT_STEP_DELAY;
                    match self.step(field, skyline) {
                        Step::Flying { hit_box, orientation } => {
                            self.banana = Some((hit_box, orientation));
                        }
                        Step::Resolved { outcome, impact } => {
                            self.resolve(outcome, impact, skyline.height());
                            break;
                        }
                    }
                }
            }
            ShotPhase::Exploding { explosion, outcome } => {
                let outcome = *outcome;
                explosion.advance(skyline, dt);
                if explosion.is_finished() {
                    self.phase = ShotPhase::Done(outcome);
                }
            }
            ShotPhase::Done(_) => {}
        }
    }

    /// Run the shot to its outcome without any pacing, carving the crater
    /// immediately.
    pub fn simulate(&mut self, field: &Playfield, skyline: &mut Skyline) -> ShotOutcome {
        loop {
            match &mut self.phase {
                ShotPhase::Armed { .. } => self.phase = ShotPhase::InFlight,
                ShotPhase::InFlight => {
                    if let Step::Resolved { outcome, impact } = self.step(field, skyline) {
                        self.resolve(outcome, impact, skyline.height());
                    }
                }
                ShotPhase::Exploding { explosion, outcome } => {
                    let outcome = *outcome;
                    explosion.carve_now(skyline);
                    self.phase = ShotPhase::Done(outcome);
                }
                ShotPhase::Done(outcome) => return *outcome,
            }
        }
    }
}
