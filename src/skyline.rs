//! Procedural city skyline.
//!
//! A skyline is the round's persistent background: a canvas with the
//! buildings painted on it, the ordered building anchors, and an occupancy
//! mask that marks every pixel that is not sky. Explosions carve into both
//! the canvas and the mask through [`Skyline::fill_circle`], so collision
//! tests never read pixels back.

use tracing::debug;

use crate::canvas::Canvas;
use crate::engine::Color;
use crate::geometry::{self, Rect};

/// Gap kept under the buildings for the wind arrow.
const BOTTOM_MARGIN: i32 = 25;
const HEIGHT_INC: i32 = 10;
const DEFAULT_WIDTH: i32 = 37;
const RANDOM_HEIGHT_DIFF: i32 = 120;
/// Shortest building, and the clearance kept between the tallest one and the
/// top of the playfield.
const MIN_HEIGHT: i32 = 25;
const WINDOW_W: i32 = 4;
const WINDOW_H: i32 = 7;
const WINDOW_SPACING_X: i32 = 10;
const WINDOW_SPACING_Y: i32 = 15;

const BUILDING_COLORS: [Color; 3] = [Color::GRAY, Color::TEAL, Color::DARK_RED];

// ── OccupancyMask ────────────────────────────────────────────────────────────

/// One flag per pixel: `true` where the skyline is solid.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyMask {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, cells: vec![false; width as usize * height as usize] }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        if !self.bounds().contains(x, y) {
            return false;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        if self.bounds().contains(x, y) {
            self.cells[y as usize * self.width as usize + x as usize] = solid;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, solid: bool) {
        let r = rect.clip(&self.bounds());
        for y in r.y..r.bottom() {
            let row = y as usize * self.width as usize;
            self.cells[row + r.x as usize..row + r.right() as usize].fill(solid);
        }
    }

    /// True if any cell inside `rect` (clipped to the mask) is solid.
    pub fn any_in(&self, rect: Rect) -> bool {
        let r = rect.clip(&self.bounds());
        (r.y..r.bottom()).any(|y| {
            let row = y as usize * self.width as usize;
            self.cells[row + r.x as usize..row + r.right() as usize].contains(&true)
        })
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

// ── Buildings ────────────────────────────────────────────────────────────────

/// Anchor of one building: its left edge and its roof line. A building's
/// width is the distance to the next anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Building {
    pub left: i32,
    pub top: i32,
}

/// Overall shape of the skyline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlopeMode {
    /// Buildings rise toward the right.
    Upward,
    /// Buildings fall toward the right.
    Downward,
    /// Starts low, climbs until the midline, then falls away.
    Valley,
    /// Starts tall, sinks until the midline, then climbs again.
    Hill,
}

impl SlopeMode {
    /// Map a d6 roll to a slope. Valleys take half the faces.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => SlopeMode::Upward,
            2 => SlopeMode::Downward,
            3..=5 => SlopeMode::Valley,
            _ => SlopeMode::Hill,
        }
    }

    pub fn start_height(self) -> i32 {
        match self {
            SlopeMode::Upward | SlopeMode::Valley => 15,
            SlopeMode::Downward | SlopeMode::Hill => 130,
        }
    }

    /// Running-height change for a building whose left edge is at `x`.
    pub fn height_step(self, x: i32, width: i32) -> i32 {
        let past_mid = x > width / 2;
        match self {
            SlopeMode::Upward => HEIGHT_INC,
            SlopeMode::Downward => -HEIGHT_INC,
            SlopeMode::Valley if past_mid => -2 * HEIGHT_INC,
            SlopeMode::Valley => 2 * HEIGHT_INC,
            SlopeMode::Hill if past_mid => 2 * HEIGHT_INC,
            SlopeMode::Hill => -2 * HEIGHT_INC,
        }
    }
}

// ── Skyline ──────────────────────────────────────────────────────────────────

pub struct Skyline {
    canvas: Canvas,
    mask: OccupancyMask,
    buildings: Vec<Building>,
    slope: SlopeMode,
}

impl Skyline {
    /// Build a new random skyline for a `width × height` playfield.
    pub fn generate(width: u32, height: u32, rng: &mut fastrand::Rng) -> Self {
        let slope = SlopeMode::from_roll(rng.u32(1..=6));
        let mut skyline = Self::empty(width, height, slope);

        let w = width as i32;
        let bottom = height as i32 - BOTTOM_MARGIN;
        let mut running = slope.start_height();
        let mut x = 2;

        while x < w - HEIGHT_INC {
            running += slope.height_step(x, w);

            let mut b_width = DEFAULT_WIDTH + rng.i32(0..=DEFAULT_WIDTH);
            if x + b_width > w {
                b_width = w - x - 2;
            }

            let mut b_height = rng.i32(HEIGHT_INC..=RANDOM_HEIGHT_DIFF) + running;
            // Too tall to leave headroom, or too short to see: use the minimum.
            if bottom - b_height <= MIN_HEIGHT || b_height < MIN_HEIGHT {
                b_height = MIN_HEIGHT;
            }

            let color = BUILDING_COLORS[rng.usize(..BUILDING_COLORS.len())];
            let top = bottom - b_height;
            skyline.paint_rect(Rect::new(x + 1, bottom - (b_height + 1), b_width - 1, b_height - 1), color);
            skyline.buildings.push(Building { left: x, top });

            let mut winx = 3;
            while winx < b_width - WINDOW_SPACING_X + WINDOW_W {
                let mut winy = 3;
                while winy < b_height - WINDOW_SPACING_Y {
                    let lit = if rng.u32(1..=4) == 1 { Color::DARK_WINDOW } else { Color::LIGHT_WINDOW };
                    skyline.paint_rect(Rect::new(x + 1 + winx, top + 1 + winy, WINDOW_W, WINDOW_H), lit);
                    winy += WINDOW_SPACING_Y;
                }
                winx += WINDOW_SPACING_X;
            }

            x += b_width;
        }

        debug!(?slope, buildings = skyline.buildings.len(), "Generated skyline");
        skyline
    }

    /// An all-sky skyline with no buildings.
    pub fn empty(width: u32, height: u32, slope: SlopeMode) -> Self {
        Self {
            canvas: Canvas::new(width, height, Color::SKY),
            mask: OccupancyMask::new(width, height),
            buildings: Vec::new(),
            slope,
        }
    }

    /// Assemble a skyline from explicit building rectangles. Each rect becomes
    /// one anchor at its top-left corner.
    pub fn from_rects(width: u32, height: u32, rects: &[Rect]) -> Self {
        let mut skyline = Self::empty(width, height, SlopeMode::Upward);
        for r in rects {
            skyline.paint_rect(*r, Color::GRAY);
            skyline.buildings.push(Building { left: r.x, top: r.y });
        }
        skyline
    }

    pub fn canvas(&self) -> &Canvas { &self.canvas }
    pub fn mask(&self) -> &OccupancyMask { &self.mask }
    pub fn buildings(&self) -> &[Building] { &self.buildings }
    pub fn slope(&self) -> SlopeMode { self.slope }
    pub fn width(&self) -> u32 { self.canvas.width() }
    pub fn height(&self) -> u32 { self.canvas.height() }

    /// True if any solid pixel lies inside `rect`, clipped to the playfield.
    pub fn is_occupied(&self, rect: Rect) -> bool {
        self.mask.any_in(rect)
    }

    /// Paint a rectangle and keep the mask in sync.
    pub fn paint_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
        self.mask.fill_rect(rect, color != Color::SKY);
    }

    /// Paint a filled disc and keep the mask in sync. Sky-coloured discs
    /// clear the mask, anything else marks it solid.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        let solid = color != Color::SKY;
        for (x, y) in geometry::points_in_radius(cx, cy, radius) {
            self.canvas.set_pixel(x, y, color);
            self.mask.set(x, y, solid);
        }
    }
}
