// =============================================================================
// GEOMETRY.RS: pixel-space primitives
//
// Everything on the playfield is an axis-aligned box on an integer pixel grid:
// - Rectangles for sprites, hit boxes and the sun
// - Line rasterisation for the wind arrow
// - Filled discs for explosions and craters
// =============================================================================

// =============================================================================
// RECTANGLES
// =============================================================================

/// Axis-aligned rectangle in pixels. `x`/`y` is the top-left corner; the
/// right and bottom edges are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Centre pixel, rounding toward the top-left.
    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// True when the two rectangles share at least one pixel. Touching edges
    /// do not count, and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// The part of `self` that lies inside `bounds`. May be empty.
    pub fn clip(&self, bounds: &Rect) -> Rect {
        let x0 = self.x.max(bounds.x);
        let y0 = self.y.max(bounds.y);
        let x1 = self.right().min(bounds.right());
        let y1 = self.bottom().min(bounds.bottom());
        Rect::new(x0, y0, (x1 - x0).max(0), (y1 - y0).max(0))
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

// =============================================================================
// BRESENHAM'S LINE ALGORITHM
// =============================================================================

/// Generate all points along a line from (x1, y1) to (x2, y2).
///
/// Uses Bresenham's line algorithm, which produces a line with no gaps.
/// The returned Vec includes both endpoints.
pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    let mut x = x1;
    let mut y = y1;
    let mut err = dx - dy;

    loop {
        points.push((x, y));

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x += sx;
        }

        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

// =============================================================================
// CIRCLE/RADIUS OPERATIONS
// =============================================================================

/// Get all points within a given radius of (cx, cy) using Euclidean distance.
///
/// This produces a filled disc, row by row from the top. A radius of zero is
/// the centre pixel alone; a negative radius is empty.
pub fn points_in_radius(cx: i32, cy: i32, radius: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    if radius < 0 {
        return points;
    }
    let r_sq = radius * radius;

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r_sq {
                points.push((cx + dx, cy + dy));
            }
        }
    }

    points
}
