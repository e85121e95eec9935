//! Explosion animation and crater carving.
//!
//! A burst of size `S` grows a red disc from radius 1 to `S - 1`, then for
//! each radius from `S` down to 2 wipes the full `S` disc back to sky and
//! draws a red disc of that radius, and finally wipes a radius-2 disc. The
//! net effect is a sky-coloured crater of radius `S`, so carving the same
//! crater twice leaves the skyline exactly as carving it once.

use crate::engine::Color;
use crate::skyline::Skyline;

/// Classic explosion size for a gorilla hit.
pub const GORILLA_EXPLOSION_SIZE: i32 = 30;
/// Seconds per radius step when a gorilla is hit.
pub const GORILLA_STEP_DELAY: f32 = 0.005;
/// Seconds per radius step when a building is hit.
pub const BUILDING_STEP_DELAY: f32 = 0.05;

/// Building explosions scale with the playfield height.
pub fn building_explosion_size(screen_height: u32) -> i32 {
    (screen_height / 50) as i32
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Burst {
    pub size: i32,
    pub step_delay: f32,
}

impl Burst {
    fn frame_count(&self) -> usize {
        let grow = (self.size - 1).max(0) as usize;
        // shrink frames, then one closing wipe
        grow + grow + 1
    }

    fn apply_frame(&self, skyline: &mut Skyline, cx: i32, cy: i32, frame: usize) {
        let grow = (self.size - 1).max(0) as usize;
        if frame < grow {
            skyline.fill_circle(cx, cy, frame as i32 + 1, Color::EXPLOSION);
        } else if frame < 2 * grow {
            let r = self.size - (frame - grow) as i32;
            skyline.fill_circle(cx, cy, self.size, Color::SKY);
            skyline.fill_circle(cx, cy, r, Color::EXPLOSION);
        } else {
            skyline.fill_circle(cx, cy, 2, Color::SKY);
        }
    }
}

/// A running sequence of bursts centred on one point.
#[derive(Clone, Debug)]
pub struct Explosion {
    cx: i32,
    cy: i32,
    bursts: Vec<Burst>,
    burst: usize,
    frame: usize,
    elapsed: f32,
    next_frame_at: f32,
}

impl Explosion {
    pub fn new(cx: i32, cy: i32, bursts: Vec<Burst>) -> Self {
        Self { cx, cy, bursts, burst: 0, frame: 0, elapsed: 0.0, next_frame_at: 0.0 }
    }

    /// A building hit: a single small, slow burst.
    pub fn building(cx: i32, cy: i32, screen_height: u32) -> Self {
        Self::new(cx, cy, vec![Burst {
            size: building_explosion_size(screen_height),
            step_delay: BUILDING_STEP_DELAY,
        }])
    }

    /// A gorilla hit: a two-thirds burst followed by a full one, both fast.
    pub fn gorilla(cx: i32, cy: i32) -> Self {
        Self::new(cx, cy, vec![
            Burst { size: GORILLA_EXPLOSION_SIZE * 2 / 3, step_delay: GORILLA_STEP_DELAY },
            Burst { size: GORILLA_EXPLOSION_SIZE, step_delay: GORILLA_STEP_DELAY },
        ])
    }

    pub fn center(&self) -> (i32, i32) { (self.cx, self.cy) }

    /// Largest radius this explosion will touch.
    pub fn radius(&self) -> i32 {
        self.bursts.iter().map(|b| b.size.max(2)).max().unwrap_or(2)
    }

    pub fn is_finished(&self) -> bool {
        self.burst >= self.bursts.len()
    }

    /// Apply the next frame. Returns the delay to wait before the one after.
    fn apply_next(&mut self, skyline: &mut Skyline) -> f32 {
        let burst = self.bursts[self.burst];
        burst.apply_frame(skyline, self.cx, self.cy, self.frame);
        self.frame += 1;
        if self.frame >= burst.frame_count() {
            self.frame = 0;
            self.burst += 1;
        }
        burst.step_delay
    }

    /// Advance by `dt` seconds, drawing every frame that came due.
    pub fn advance(&mut self, skyline: &mut Skyline, dt: f32) {
        self.elapsed += dt;
        while !self.is_finished() && self.elapsed >= self.next_frame_at {
            self.next_frame_at += self.apply_next(skyline);
        }
    }

    /// Draw every remaining frame at once.
    pub fn carve_now(&mut self, skyline: &mut Skyline) {
        while !self.is_finished() {
            self.apply_next(skyline);
        }
    }
}
