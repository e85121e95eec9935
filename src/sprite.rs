//! ASCII-art sprites.
//!
//! Each sprite is authored as rows of text: `X` is a foreground pixel and any
//! other character is background. Rows may be ragged; short rows are padded
//! with background up to the widest row.

use crate::engine::Color;
use crate::shot::Orientation;

// ── Sprite ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Sprite {
    /// Rasterise ASCII art. Blank rows count toward the height.
    pub fn from_ascii(rows: &[&str], fg: Color, bg: Color) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
        let height = rows.len() as u32;
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            let mut n = 0;
            for ch in row.chars() {
                pixels.push(if ch == 'X' { fg } else { bg });
                n += 1;
            }
            pixels.extend(std::iter::repeat_n(bg, width as usize - n));
        }
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }
    pub fn size(&self) -> (i32, i32) { (self.width as i32, self.height as i32) }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[(y * self.width + x) as usize])
    }

    /// Left-right mirror image.
    pub fn mirrored(&self) -> Self {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks(self.width.max(1) as usize) {
            pixels.extend(row.iter().rev());
        }
        Self { width: self.width, height: self.height, pixels }
    }
}

// ── Art ──────────────────────────────────────────────────────────────────────

const GORILLA_ARMS_DOWN: &[&str] = &[
    "       XXXXXXX       ",
    "      XXXXXXXXX      ",
    "      XX  X  XX      ",
    "      XXXXXXXXX      ",
    "       XXX XXX       ",
    "        XXXXX        ",
    "   XXXXXXXXXXXXXXX   ",
    "  XXXXXXXXXXXXXXXXX  ",
    " XXXX XXXXXXXXX XXXX ",
    " XXX  XXXXXXXXX  XXX ",
    " XXX  XXXXXXXXX  XXX ",
    " XXX  XXXXXXXXX  XXX ",
    " XXX   XXXXXXX   XXX ",
    "  XXX  XXXXXXX  XXX  ",
    "       XXX XXX       ",
    "      XXXX XXXX      ",
    "     XXXX   XXXX     ",
    "     XXX     XXX     ",
    "    XXXX     XXXX    ",
];

// Arm on the screen-left side raised. The right-arm pose is its mirror.
const GORILLA_LEFT_ARM_UP: &[&str] = &[
    " XX    XXXXXXX       ",
    " XXX  XXXXXXXXX      ",
    " XXX  XX  X  XX      ",
    " XXX  XXXXXXXXX      ",
    " XXX   XXX XXX       ",
    " XXX    XXXXX        ",
    " XXXXXXXXXXXXXXXXX   ",
    "  XXXXXXXXXXXXXXXXX  ",
    "      XXXXXXXXX XXXX ",
    "      XXXXXXXXX  XXX ",
    "      XXXXXXXXX  XXX ",
    "      XXXXXXXXX  XXX ",
    "       XXXXXXX   XXX ",
    "       XXXXXXX  XXX  ",
    "       XXX XXX       ",
    "      XXXX XXXX      ",
    "     XXXX   XXXX     ",
    "     XXX     XXX     ",
    "    XXXX     XXXX    ",
];

const BANANA_UP: &[&str] = &[
    "X     X",
    "XX   XX",
    " XXXXX ",
    "  XXX  ",
];

const BANANA_DOWN: &[&str] = &[
    "  XXX  ",
    " XXXXX ",
    "XX   XX",
    "X     X",
];

const BANANA_LEFT: &[&str] = &[
    "  XX",
    " XX ",
    "XX  ",
    "XX  ",
    "XX  ",
    " XX ",
    "  XX",
];

const SUN_NORMAL: &[&str] = &[
    "          X          ",
    "    X     X     X    ",
    "     X  XXXXX  X     ",
    "      XXXXXXXXX      ",
    "     XXX XXX XXX     ",
    "     XXXXXXXXXXX     ",
    "XXXXXXXXXXXXXXXXXXXXX",
    "     XX XXXXX XX     ",
    "     XXX     XXX     ",
    "      XXXXXXXXX      ",
    "     X  XXXXX  X     ",
    "    X     X     X    ",
    "          X          ",
];

const SUN_SHOCKED: &[&str] = &[
    "          X          ",
    "    X     X     X    ",
    "     X  XXXXX  X     ",
    "      XXXXXXXXX      ",
    "     XXX XXX XXX     ",
    "     XXXXXXXXXXX     ",
    "XXXXXXXXXXXXXXXXXXXXX",
    "     XXXX   XXXX     ",
    "     XXXX   XXXX     ",
    "      XXXXXXXXX      ",
    "     X  XXXXX  X     ",
    "    X     X     X    ",
    "          X          ",
];

const STAR: &[&str] = &[
    "   X   ",
    "X  X  X",
    " X X X ",
    "  XXX  ",
    " X X X ",
    "X  X  X",
    "   X   ",
];

// ── SpriteSet ────────────────────────────────────────────────────────────────

/// Which gorilla pose to draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arms {
    Down,
    LeftUp,
    RightUp,
}

impl Arms {
    /// The other raised-arm pose, used to animate dances.
    pub fn flip(self) -> Self {
        match self {
            Arms::LeftUp => Arms::RightUp,
            Arms::RightUp => Arms::LeftUp,
            Arms::Down => Arms::Down,
        }
    }
}

/// Every sprite the game draws, rasterised once at start-up.
pub struct SpriteSet {
    gorilla_down: Sprite,
    gorilla_left: Sprite,
    gorilla_right: Sprite,
    banana_up: Sprite,
    banana_down: Sprite,
    banana_left: Sprite,
    banana_right: Sprite,
    sun_normal: Sprite,
    sun_shocked: Sprite,
    pub star: Sprite,
}

impl SpriteSet {
    pub fn new() -> Self {
        let gorilla_left = Sprite::from_ascii(GORILLA_LEFT_ARM_UP, Color::GORILLA, Color::SKY);
        let banana_left = Sprite::from_ascii(BANANA_LEFT, Color::BANANA, Color::SKY);
        Self {
            gorilla_down: Sprite::from_ascii(GORILLA_ARMS_DOWN, Color::GORILLA, Color::SKY),
            gorilla_right: gorilla_left.mirrored(),
            gorilla_left,
            banana_up: Sprite::from_ascii(BANANA_UP, Color::BANANA, Color::SKY),
            banana_down: Sprite::from_ascii(BANANA_DOWN, Color::BANANA, Color::SKY),
            banana_right: banana_left.mirrored(),
            banana_left,
            sun_normal: Sprite::from_ascii(SUN_NORMAL, Color::SUN, Color::SKY),
            sun_shocked: Sprite::from_ascii(SUN_SHOCKED, Color::SUN, Color::SKY),
            star: Sprite::from_ascii(STAR, Color::DARK_RED, Color::BLACK),
        }
    }

    pub fn gorilla(&self, arms: Arms) -> &Sprite {
        match arms {
            Arms::Down => &self.gorilla_down,
            Arms::LeftUp => &self.gorilla_left,
            Arms::RightUp => &self.gorilla_right,
        }
    }

    pub fn banana(&self, orientation: Orientation) -> &Sprite {
        match orientation {
            Orientation::Up => &self.banana_up,
            Orientation::Down => &self.banana_down,
            Orientation::Left => &self.banana_left,
            Orientation::Right => &self.banana_right,
        }
    }

    pub fn sun(&self, shocked: bool) -> &Sprite {
        if shocked { &self.sun_shocked } else { &self.sun_normal }
    }

    /// All gorilla poses share one size; hit boxes use it.
    pub fn gorilla_size(&self) -> (i32, i32) {
        self.gorilla_down.size()
    }
}

impl Default for SpriteSet {
    fn default() -> Self {
        Self::new()
    }
}
