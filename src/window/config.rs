use serde::{Deserialize, Serialize};

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowMode {
    /// Standard decorated window at the playfield resolution.
    #[default]
    Windowed,
    /// Exclusive hardware fullscreen at the closest available video mode.
    Fullscreen,
    /// Borderless window sized to match the monitor's native resolution.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **physical** dimensions are the actual pixel size of the OS window
///   (accounts for HiDPI scaling and fullscreen mode).
/// - **logical** dimensions are the playfield resolution the game draws into.
///   It never changes after start-up; the renderer scales it to fit.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub physical_width: u32,
    pub physical_height: u32,
    pub logical_width: u32,
    pub logical_height: u32,
    pub mode: WindowMode,
}

/// A sub-rectangle of the window in physical pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    /// A window whose physical size starts equal to the playfield.
    pub fn new(logical_width: u32, logical_height: u32, mode: WindowMode) -> Self {
        Self {
            physical_width: logical_width,
            physical_height: logical_height,
            logical_width,
            logical_height,
            mode,
        }
    }

    /// Aspect ratio of the **logical** resolution (`logical_width / logical_height`).
    ///
    /// Returns `0.0` when `logical_height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }

    /// Largest viewport with the playfield's aspect ratio that fits the
    /// physical window, centred. Bars fill the rest.
    pub fn letterbox(&self) -> Viewport {
        let pw = self.physical_width as f32;
        let ph = self.physical_height as f32;
        let aspect = self.aspect_ratio();
        if pw <= 0.0 || ph <= 0.0 || aspect <= 0.0 {
            return Viewport { x: 0.0, y: 0.0, width: pw.max(0.0), height: ph.max(0.0) };
        }

        let (width, height) = if pw / ph > aspect {
            (ph * aspect, ph)
        } else {
            (pw, pw / aspect)
        };
        Viewport {
            x: ((pw - width) * 0.5).floor(),
            y: ((ph - height) * 0.5).floor(),
            width,
            height,
        }
    }
}
