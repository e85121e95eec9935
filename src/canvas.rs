//! CPU-side RGBA raster that every screen draws into.
//!
//! The renderer uploads one `Canvas` per frame; the skyline keeps another as
//! its persistent background. All drawing clips silently at the edges.

use crate::engine::Color;
use crate::geometry::{self, Rect};
use crate::sprite::Sprite;

#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Raw RGBA8 bytes, row-major, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.clip(&self.bounds());
        for y in r.y..r.bottom() {
            let row = y as usize * self.width as usize;
            self.pixels[row + r.x as usize..row + r.right() as usize].fill(color);
        }
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        for (x, y) in geometry::line(x1, y1, x2, y2) {
            self.set_pixel(x, y, color);
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        for (x, y) in geometry::points_in_radius(cx, cy, radius) {
            self.set_pixel(x, y, color);
        }
    }

    /// Draw `sprite` with its top-left corner at `(x, y)`. Sprites are opaque:
    /// their background colour is painted too.
    pub fn blit_sprite(&mut self, sprite: &Sprite, x: i32, y: i32) {
        for sy in 0..sprite.height() as i32 {
            for sx in 0..sprite.width() as i32 {
                if let Some(c) = sprite.pixel(sx as u32, sy as u32) {
                    self.set_pixel(x + sx, y + sy, c);
                }
            }
        }
    }

    /// Copy all of `src` onto this canvas at `(x, y)`.
    pub fn blit_canvas(&mut self, src: &Canvas, x: i32, y: i32) {
        if x == 0 && y == 0 && src.width == self.width && src.height == self.height {
            self.pixels.copy_from_slice(&src.pixels);
            return;
        }
        for sy in 0..src.height as i32 {
            for sx in 0..src.width as i32 {
                let c = src.pixels[sy as usize * src.width as usize + sx as usize];
                self.set_pixel(x + sx, y + sy, c);
            }
        }
    }
}
