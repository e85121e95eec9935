pub mod config;

pub use config::{Viewport, WindowConfig, WindowMode};

use tracing::debug;
use winit::dpi::PhysicalSize;
use winit::monitor::VideoModeHandle;
use winit::window::{Fullscreen, Window};

/// Put `window` into the presentation `config.mode` asks for.
///
/// Windowed mode keeps decorations and lets the player resize freely, but
/// never below the playfield. Fullscreen takes the video mode closest in
/// area to the playfield and drops to borderless when the monitor lists
/// none. Either way the renderer letterboxes the playfield into whatever
/// size the OS hands back.
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    let playfield = PhysicalSize::new(config.logical_width, config.logical_height);
    let fullscreen = match config.mode {
        WindowMode::Windowed => None,
        WindowMode::Borderless => Some(Fullscreen::Borderless(None)),
        WindowMode::Fullscreen => Some(exclusive_or_borderless(window, playfield)),
    };
    debug!(mode = ?config.mode, "Applying window mode");

    let windowed = fullscreen.is_none();
    window.set_fullscreen(fullscreen);
    window.set_decorations(windowed);
    if windowed {
        window.set_min_inner_size(Some(playfield));
        // Applied asynchronously on some platforms; `Resized` reports it.
        let _ = window.request_inner_size(PhysicalSize::new(
            config.physical_width,
            config.physical_height,
        ));
    }
}

fn exclusive_or_borderless(window: &Window, target: PhysicalSize<u32>) -> Fullscreen {
    let Some(monitor) = window.current_monitor() else {
        return Fullscreen::Borderless(None);
    };
    let modes: Vec<VideoModeHandle> = monitor.video_modes().collect();
    match closest_by_area(modes.iter().map(VideoModeHandle::size), target) {
        Some(i) => Fullscreen::Exclusive(modes[i].clone()),
        None => Fullscreen::Borderless(Some(monitor)),
    }
}

/// Index of the size whose pixel count is nearest `target`'s. Ties keep the
/// earliest candidate.
pub fn closest_by_area(
    candidates: impl IntoIterator<Item = PhysicalSize<u32>>,
    target: PhysicalSize<u32>,
) -> Option<usize> {
    let area = |s: PhysicalSize<u32>| s.width as u64 * s.height as u64;
    let wanted = area(target);
    candidates
        .into_iter()
        .enumerate()
        .min_by_key(|(_, s)| area(*s).abs_diff(wanted))
        .map(|(i, _)| i)
}
