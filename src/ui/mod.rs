pub mod font;
pub mod widgets;

pub use font::{Align, Font};
pub use widgets::{InputBox, InputMode};

use crate::canvas::Canvas;
use crate::sprite::Sprite;

// ── StarBorder ────────────────────────────────────────────────────────────────

/// Marching border of stars around the title and game-over screens.
///
/// Top and bottom rows shift one star width per tick and wrap every four;
/// the side columns move 12 px per tick and wrap every 84.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StarBorder {
    pub row_phase: i32,
    pub column_offset: i32,
}

impl StarBorder {
    const ROW_PERIOD: i32 = 4;
    const COLUMN_STEP: i32 = 12;
    const COLUMN_PERIOD: i32 = 84;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.row_phase = (self.row_phase + 1) % Self::ROW_PERIOD;
        self.column_offset = (self.column_offset + Self::COLUMN_STEP) % Self::COLUMN_PERIOD;
    }

    pub fn draw(&self, canvas: &mut Canvas, star: &Sprite) {
        let (sw, sh) = star.size();
        let w = canvas.width() as i32;
        let h = canvas.height() as i32;
        let across = w / (Self::ROW_PERIOD * sw.max(1)) + 1;
        let down = h / Self::COLUMN_PERIOD + 1;

        for i in 0..across {
            let top_x = 2 + ((Self::ROW_PERIOD - 1 - self.row_phase) + i * Self::ROW_PERIOD) * sw;
            canvas.blit_sprite(star, top_x, 3);
            let bottom_x = 2 + (self.row_phase + i * Self::ROW_PERIOD) * sw;
            canvas.blit_sprite(star, bottom_x, h - 7 - sh);
        }

        for i in 0..down {
            let travel = 6 + sh + self.column_offset + i * Self::COLUMN_PERIOD;
            canvas.blit_sprite(star, 5, travel);
            canvas.blit_sprite(star, w - 5 - sw, h - travel);
        }
    }
}
