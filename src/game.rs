//! Match bookkeeping: players, rounds, scores and turns.

use glam::IVec2;
use tracing::info;

use crate::error::GameError;
use crate::geometry::Rect;
use crate::placement;
use crate::shot::{BananaSizes, Playfield, ShotOutcome};
use crate::skyline::Skyline;

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// 0 for player 1, 1 for player 2.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

// ── Wind ─────────────────────────────────────────────────────────────────────

/// Wind for a new round: 5 to 15 in a random direction.
pub fn random_wind(rng: &mut fastrand::Rng) -> i32 {
    let speed = rng.i32(5..=15);
    if rng.bool() { -speed } else { speed }
}

// ── Round ────────────────────────────────────────────────────────────────────

/// One skyline with two gorillas on it. Replaced whenever a gorilla is hit.
pub struct Round {
    pub skyline: Skyline,
    /// Top-left corners of player 1's and player 2's gorilla.
    pub gorillas: [IVec2; 2],
    pub wind: i32,
    pub playfield: Playfield,
}

impl Round {
    /// Generate a skyline, place both gorillas and roll the wind.
    pub fn generate(
        width: u32,
        height: u32,
        gorilla_size: (i32, i32),
        banana: BananaSizes,
        sun: Rect,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, GameError> {
        let skyline = Skyline::generate(width, height, rng);
        let gorillas = placement::place(skyline.buildings(), gorilla_size, rng)?;
        let wind = random_wind(rng);
        info!(
            slope = ?skyline.slope(),
            buildings = skyline.buildings().len(),
            wind,
            "New round"
        );
        Ok(Self::assemble(skyline, gorillas, wind, gorilla_size, banana, sun))
    }

    /// Build a round from parts; used when the skyline is not random.
    pub fn assemble(
        skyline: Skyline,
        gorillas: [IVec2; 2],
        wind: i32,
        gorilla_size: (i32, i32),
        banana: BananaSizes,
        sun: Rect,
    ) -> Self {
        let (gw, gh) = gorilla_size;
        let playfield = Playfield {
            width: skyline.width() as i32,
            height: skyline.height() as i32,
            sun,
            gorillas: gorillas.map(|g| Rect::new(g.x, g.y, gw, gh)),
            banana,
        };
        Self { skyline, gorillas, wind, playfield }
    }

    pub fn gorilla(&self, player: Player) -> IVec2 {
        self.gorillas[player.index()]
    }
}

// ── Match state ──────────────────────────────────────────────────────────────

/// What a resolved shot means for the match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Nobody was hit; the other player throws next.
    NextTurn,
    /// A gorilla was hit and `scorer` got the point. A new round follows.
    RoundOver { scorer: Player },
    /// `winner` reached the target score.
    MatchOver { winner: Player },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MatchState {
    scores: [u32; 2],
    target: u32,
    turn: Player,
    starting_player: Player,
}

impl MatchState {
    pub fn new(target: u32, starting_player: Player) -> Self {
        Self {
            scores: [0, 0],
            target: target.max(1),
            turn: starting_player,
            starting_player,
        }
    }

    pub fn scores(&self) -> [u32; 2] { self.scores }
    pub fn score(&self, player: Player) -> u32 { self.scores[player.index()] }
    pub fn target(&self) -> u32 { self.target }
    pub fn turn(&self) -> Player { self.turn }

    pub fn is_over(&self) -> bool {
        self.scores.iter().any(|&s| s >= self.target)
    }

    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.score(p) >= self.target)
    }

    /// Apply a shot's outcome. A hit gorilla scores for the other player,
    /// even when the thrower hit their own gorilla. After a hit the next
    /// round opens with the starting player; otherwise the turn passes.
    pub fn resolve(&mut self, outcome: ShotOutcome) -> Resolution {
        match outcome {
            ShotOutcome::HitGorilla(hit) => {
                let scorer = hit.other();
                self.scores[scorer.index()] += 1;
                self.turn = self.starting_player;
                info!(?scorer, scores = ?self.scores, "Gorilla hit");
                if self.is_over() {
                    info!(winner = ?scorer, "Match over");
                    Resolution::MatchOver { winner: scorer }
                } else {
                    Resolution::RoundOver { scorer }
                }
            }
            ShotOutcome::HitBuilding | ShotOutcome::Miss => {
                self.turn = self.turn.other();
                Resolution::NextTurn
            }
        }
    }
}
